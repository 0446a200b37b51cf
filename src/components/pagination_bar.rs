//! Previous / numbered / next page buttons for server-paginated listings.

use leptos::prelude::*;

use crate::util::listing::Pagination;

#[component]
pub fn PaginationBar(pagination: RwSignal<Pagination>) -> impl IntoView {
    let go_to = move |page: u32| {
        pagination.update(|p| p.go_to(page));
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    };

    view! {
        <Show when=move || pagination.with(Pagination::show_controls)>
            <div class="pagination">
                <button
                    class="pagination-btn"
                    disabled=move || !pagination.with(Pagination::has_prev)
                    on:click=move |_| go_to(pagination.get_untracked().page.saturating_sub(1))
                >
                    "← Previous"
                </button>
                <div class="pagination-numbers">
                    {move || {
                        let current = pagination.get();
                        current
                            .page_window()
                            .into_iter()
                            .map(|n| {
                                view! {
                                    <button
                                        class="pagination-number"
                                        class:active={current.page == n}
                                        on:click=move |_| go_to(n)
                                    >
                                        {n}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button
                    class="pagination-btn"
                    disabled=move || !pagination.with(Pagination::has_next)
                    on:click=move |_| go_to(pagination.get_untracked().page + 1)
                >
                    "Next →"
                </button>
            </div>
        </Show>
    }
}
