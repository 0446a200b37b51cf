//! Career roadmap listing.

use leptos::prelude::*;

use crate::components::status::{ErrorView, LoadingView};
use crate::net::types::Roadmap;
use crate::routes::roadmap_path;
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::auth::require_credential;
use crate::util::listing::CatalogFilters;

const DIFFICULTIES: [&str; 3] = ["beginner", "intermediate", "advanced"];

#[component]
pub fn RoadmapsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let filters = RwSignal::new(CatalogFilters::default());
    let roadmaps = RwSignal::new(LoadState::<Vec<Roadmap>>::Loading);
    let tracker = StoredValue::new(RequestTracker::new());
    let notice = RwSignal::new(String::new());

    Effect::new(move || {
        let query = filters.with(CatalogFilters::query);
        let key = query.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");
        let api = session.api();
        let token = session.credential();
        spawn_tracked(tracker, roadmaps, key, async move {
            api.roadmaps(&query, token.as_deref()).await.map(|e| e.data)
        });
    });

    let follow = move |roadmap_id: String| {
        let token = match session.with_untracked(|s| require_credential(s, "Please login to follow roadmaps")) {
            Ok(token) => token,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.follow_roadmap(&token, &roadmap_id).await {
                Ok(()) => notice.set("Roadmap follow status updated!".to_owned()),
                Err(e) => notice.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="listing-page">
            <h1>"Career Roadmaps"</h1>
            <div class="filters">
                <input
                    type="search"
                    placeholder="Search roadmaps..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || filters.with(|f| f.category.clone())
                    on:input=move |ev| filters.update(|f| f.category = event_target_value(&ev))
                />
                <select
                    prop:value=move || filters.with(|f| f.difficulty.clone())
                    on:change=move |ev| filters.update(|f| f.difficulty = event_target_value(&ev))
                >
                    <option value="">"All levels"</option>
                    {DIFFICULTIES.map(|d| view! { <option value=d>{d}</option> }).collect_view()}
                </select>
            </div>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
            {move || match roadmaps.get() {
                LoadState::Loading => view! { <LoadingView/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
                LoadState::NotFound => view! { <ErrorView message="No roadmaps found."/> }.into_any(),
                LoadState::Ready(list) => view! {
                    <div class="card-grid">
                        {list
                            .into_iter()
                            .map(|roadmap| {
                                let id = roadmap.id.clone();
                                view! {
                                    <div class="card roadmap-card">
                                        <a href=roadmap_path(&roadmap.id)>
                                            <h3>{roadmap.title}</h3>
                                        </a>
                                        <span class="tag">{roadmap.difficulty}</span>
                                        <p>{roadmap.description}</p>
                                        <button class="btn" on:click=move |_| follow(id.clone())>"Follow"</button>
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
