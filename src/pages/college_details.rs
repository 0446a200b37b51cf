//! College detail page with reviews.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorView, LoadingView, NotFoundView};
use crate::net::types::{College, ReviewDraft};
use crate::routes::CONSULTANCY_PATH;
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::auth::require_credential;

#[component]
pub fn CollegeDetailsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let college = RwSignal::new(LoadState::<College>::Loading);
    let tracker = StoredValue::new(RequestTracker::new());
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let api = session.api();
        let key = id.clone();
        spawn_tracked(tracker, college, key, async move { api.college(&id).await.map(|e| e.data) });
    });

    view! {
        <div class="detail-page">
            {move || match college.get() {
                LoadState::Loading => view! { <LoadingView/> }.into_any(),
                LoadState::NotFound => {
                    view! { <NotFoundView what="College" back_href=CONSULTANCY_PATH/> }.into_any()
                }
                LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
                LoadState::Ready(c) => {
                    let id = c.id.clone();
                    view! {
                        <header class="detail-header">
                            <h1>{c.name}</h1>
                            <span class="tag">{c.kind}</span>
                            <p>{format!("{}, {}", c.location.city, c.location.state)}</p>
                            <p class="rating">
                                {format!("★ {:.1} ({} reviews)", c.rating.average, c.rating.count)}
                            </p>
                        </header>
                        <p class="detail-description">{c.description}</p>
                        <section class="reviews">
                            <h2>"Reviews"</h2>
                            {if c.reviews.is_empty() {
                                view! { <p>"No reviews yet."</p> }.into_any()
                            } else {
                                c.reviews
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <div class="review">
                                                <strong>{format!("{} ★ {}", r.rating, r.title)}</strong>
                                                <p>{r.comment}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                            <ReviewForm college_id=id reload/>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ReviewForm(college_id: String, reload: RwSignal<u32>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let draft = RwSignal::new(ReviewDraft::default());
    let notice = RwSignal::new(String::new());
    let college_id = StoredValue::new(college_id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = match session.with_untracked(|s| require_credential(s, "Please login to add a review")) {
            Ok(token) => token,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let api = session.api();
        let review = draft.get_untracked();
        let id = college_id.get_value();
        leptos::task::spawn_local(async move {
            match api.add_review(&token, &id, &review).await {
                Ok(()) => {
                    notice.set("Review added successfully!".to_owned());
                    draft.set(ReviewDraft::default());
                    reload.update(|n| *n += 1);
                }
                Err(e) => notice.set(e.to_string()),
            }
        });
    };

    view! {
        <form class="review-form" on:submit=on_submit>
            <h3>"Write a review"</h3>
            <select
                prop:value=move || draft.with(|d| d.rating.to_string())
                on:change=move |ev| {
                    let rating = event_target_value(&ev).parse().unwrap_or(5);
                    draft.update(|d| d.rating = rating);
                }
            >
                {(1..=5_u8).rev().map(|n| view! { <option value=n.to_string()>{format!("{n} ★")}</option> }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
            <textarea
                placeholder="Share your experience"
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |ev| draft.update(|d| d.comment = event_target_value(&ev))
            ></textarea>
            <button class="btn" type="submit">"Submit review"</button>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
        </form>
    }
}
