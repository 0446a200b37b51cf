//! College listing with filters and server-side pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every filter or page change issues a new listing request keyed by its
//! query string; responses for superseded queries are dropped by the tracker.

use leptos::prelude::*;

use crate::components::pagination_bar::PaginationBar;
use crate::components::status::{ErrorView, LoadingView};
use crate::net::types::{College, Envelope};
use crate::routes::college_path;
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::listing::{COLLEGE_PAGE_SIZE, CollegeFilters, Pagination};

const COLLEGE_TYPES: [&str; 5] = ["Engineering", "Medical", "Management", "Arts", "Science"];

#[component]
pub fn ConsultancyPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let filters = RwSignal::new(CollegeFilters::default());
    let pagination = RwSignal::new(Pagination::new(COLLEGE_PAGE_SIZE));
    let listing = RwSignal::new(LoadState::<Envelope<Vec<College>>>::Loading);
    let tracker = StoredValue::new(RequestTracker::new());

    // Totals updates must not refetch, so the request depends on the page number only.
    let page = Memo::new(move |_| pagination.with(|p| p.page));
    Effect::new(move || {
        let cursor = Pagination { page: page.get(), ..Pagination::new(COLLEGE_PAGE_SIZE) };
        let query = filters.with(|f| f.query(&cursor));
        let key = query.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");
        let api = session.api();
        spawn_tracked(tracker, listing, key, async move { api.colleges(&query).await });
    });

    // Totals come back with each listing; copy them into the cursor.
    Effect::new(move || {
        if let LoadState::Ready(envelope) = listing.get() {
            pagination.update(|p| p.update_totals(envelope.total, envelope.pages));
        }
    });

    let set_filter = move |apply: fn(&mut CollegeFilters, String), value: String| {
        filters.update(|f| apply(f, value));
        pagination.update(Pagination::reset);
    };
    let clear_filters = move |_: leptos::ev::MouseEvent| {
        filters.set(CollegeFilters::default());
        pagination.update(Pagination::reset);
    };

    view! {
        <div class="listing-page">
            <h1>"Find your college"</h1>
            <div class="filters">
                <input
                    type="search"
                    placeholder="Search colleges..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| set_filter(|f, v| f.search = v, event_target_value(&ev))
                />
                <select
                    prop:value=move || filters.with(|f| f.kind.clone())
                    on:change=move |ev| set_filter(|f, v| f.kind = v, event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {COLLEGE_TYPES.map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="State"
                    prop:value=move || filters.with(|f| f.state.clone())
                    on:input=move |ev| set_filter(|f, v| f.state = v, event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="City"
                    prop:value=move || filters.with(|f| f.city.clone())
                    on:input=move |ev| set_filter(|f, v| f.city = v, event_target_value(&ev))
                />
                <button class="btn btn--ghost" on:click=clear_filters disabled=move || filters.with(CollegeFilters::is_empty)>
                    "Clear filters"
                </button>
            </div>

            {move || match listing.get() {
                LoadState::Loading => view! { <LoadingView message="Loading amazing colleges for you..."/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
                LoadState::NotFound => view! { <ErrorView message="No colleges found."/> }.into_any(),
                LoadState::Ready(envelope) if envelope.data.is_empty() => {
                    view! { <p class="listing-empty">"No colleges match your filters."</p> }.into_any()
                }
                LoadState::Ready(envelope) => view! {
                    <p class="listing-count">{format!("{} colleges found", envelope.total)}</p>
                    <div class="card-grid">
                        {envelope.data.into_iter().map(|college| view! { <CollegeCard college/> }).collect_view()}
                    </div>
                }
                    .into_any(),
            }}

            <PaginationBar pagination/>
        </div>
    }
}

#[component]
fn CollegeCard(college: College) -> impl IntoView {
    view! {
        <a class="card college-card" href=college_path(&college.id)>
            <h3>{college.name}</h3>
            <span class="tag">{college.kind}</span>
            <p>{format!("{}, {}", college.location.city, college.location.state)}</p>
            <p class="rating">{format!("★ {:.1} ({})", college.rating.average, college.rating.count)}</p>
        </a>
    }
}
