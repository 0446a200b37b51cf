//! Single roadmap with its phases.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorView, LoadingView, NotFoundView};
use crate::net::types::Roadmap;
use crate::routes::ROADMAPS_PATH;
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::auth::require_credential;

#[component]
pub fn RoadmapDetailsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let roadmap = RwSignal::new(LoadState::<Roadmap>::Loading);
    let tracker = StoredValue::new(RequestTracker::new());
    let notice = RwSignal::new(String::new());

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    Effect::new(move || {
        let id = id.get();
        let api = session.api();
        let token = session.credential();
        let key = id.clone();
        spawn_tracked(tracker, roadmap, key, async move {
            api.roadmap(&id, token.as_deref()).await.map(|e| e.data)
        });
    });

    let on_follow = move |_: leptos::ev::MouseEvent| {
        let token = match session.with_untracked(|s| require_credential(s, "Please login to follow this roadmap")) {
            Ok(token) => token,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let api = session.api();
        let roadmap_id = id.get_untracked();
        leptos::task::spawn_local(async move {
            match api.follow_roadmap(&token, &roadmap_id).await {
                Ok(()) => notice.set("Roadmap follow status updated!".to_owned()),
                Err(e) => notice.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="detail-page">
            {move || match roadmap.get() {
                LoadState::Loading => view! { <LoadingView/> }.into_any(),
                LoadState::NotFound => view! { <NotFoundView what="Roadmap" back_href=ROADMAPS_PATH/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
                LoadState::Ready(r) => view! {
                    <header class="detail-header">
                        <h1>{r.title}</h1>
                        <span class="tag">{r.category}</span>
                        <span class="tag">{r.difficulty}</span>
                        <button class="btn" on:click=on_follow>"Follow roadmap"</button>
                    </header>
                    <p class="detail-description">{r.description}</p>
                    <ol class="roadmap-phases">
                        {r.phases
                            .into_iter()
                            .map(|phase| {
                                view! {
                                    <li class="roadmap-phase">
                                        <h3>{phase.title}</h3>
                                        <span class="duration">{phase.duration}</span>
                                        <p>{phase.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                }
                    .into_any(),
            }}
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
