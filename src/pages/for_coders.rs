//! Course catalog for programmers, with enrollment.

use leptos::prelude::*;

use crate::components::status::{ErrorView, LoadingView};
use crate::content::Language;
use crate::net::types::Course;
use crate::routes::{course_path, language_path};
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::auth::require_credential;
use crate::util::listing::CatalogFilters;

#[component]
pub fn ForCodersPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let filters = RwSignal::new(CatalogFilters::default());
    let courses = RwSignal::new(LoadState::<Vec<Course>>::Loading);
    let tracker = StoredValue::new(RequestTracker::new());
    let notice = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        let query = filters.with(CatalogFilters::query);
        let key = query.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");
        let api = session.api();
        spawn_tracked(tracker, courses, key, async move { api.courses(&query).await.map(|e| e.data) });
    });

    let enroll = move |course_id: String| {
        let token = match session.with_untracked(|s| require_credential(s, "Please login to enroll in courses")) {
            Ok(token) => token,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.enroll_course(&token, &course_id).await {
                Ok(()) => {
                    notice.set("Enrolled successfully!".to_owned());
                    reload.update(|n| *n += 1);
                }
                Err(e) => notice.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="listing-page">
            <section class="hero hero--coders">
                <h1>"For Coders"</h1>
                <p>"Free tutorials and structured courses."</p>
                <div class="hero__actions">
                    {Language::ALL
                        .into_iter()
                        .map(|l| view! { <a class="btn btn--ghost" href=language_path(l)>{l.tutorial().title}</a> })
                        .collect_view()}
                </div>
            </section>
            <div class="filters">
                <input
                    type="search"
                    placeholder="Search courses..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || filters.with(|f| f.category.clone())
                    on:input=move |ev| filters.update(|f| f.category = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Difficulty"
                    prop:value=move || filters.with(|f| f.difficulty.clone())
                    on:input=move |ev| filters.update(|f| f.difficulty = event_target_value(&ev))
                />
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
            {move || match courses.get() {
                LoadState::Loading => view! { <LoadingView/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
                LoadState::NotFound => view! { <ErrorView message="No courses found."/> }.into_any(),
                LoadState::Ready(list) => view! {
                    <div class="card-grid">
                        {list
                            .into_iter()
                            .map(|course| {
                                let id = course.id.clone();
                                view! {
                                    <div class="card">
                                        <h3>
                                            <a href=course_path(&course.id)>{course.title}</a>
                                        </h3>
                                        <span class="tag">{course.level}</span>
                                        <p>{course.description}</p>
                                        <button class="btn" on:click=move |_| enroll(id.clone())>"Enroll"</button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
