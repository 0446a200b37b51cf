//! Single course with its syllabus outline and enrollment.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorView, LoadingView, NotFoundView};
use crate::net::types::Course;
use crate::routes::FOR_CODERS_PATH;
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::auth::require_credential;

/// Headed bullet list; nothing when `items` is empty.
fn list_section(heading: &'static str, items: Vec<String>) -> AnyView {
    if items.is_empty() {
        return ().into_any();
    }
    view! {
        <section class="detail-section">
            <h2>{heading}</h2>
            <ul class="detail-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

#[component]
pub fn CourseDetailsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();
    let course = RwSignal::new(LoadState::<Course>::Loading);
    let tracker = StoredValue::new(RequestTracker::new());
    let notice = RwSignal::new(String::new());

    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    Effect::new(move || {
        let id = id.get();
        let api = session.api();
        let key = id.clone();
        spawn_tracked(tracker, course, key, async move { api.course(&id).await.map(|e| e.data) });
    });

    let on_enroll = move |_: leptos::ev::MouseEvent| {
        let token = match session.with_untracked(|s| require_credential(s, "Please login to enroll")) {
            Ok(token) => token,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        let api = session.api();
        let course_id = id.get_untracked();
        leptos::task::spawn_local(async move {
            match api.enroll_course(&token, &course_id).await {
                Ok(()) => notice.set("Enrolled successfully! Start learning now.".to_owned()),
                Err(e) => notice.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="detail-page">
            {move || match course.get() {
                LoadState::Loading => view! { <LoadingView/> }.into_any(),
                LoadState::NotFound => view! { <NotFoundView what="Course" back_href=FOR_CODERS_PATH/> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
                LoadState::Ready(c) => view! {
                    <header class="detail-header">
                        <h1>{c.title}</h1>
                        <span class="tag">{c.category}</span>
                        <span class="tag">{c.difficulty}</span>
                        <span class="duration">{c.duration}</span>
                        <span class="muted">{format!("{} students enrolled", c.enrolled_students)}</span>
                        <button class="btn" on:click=on_enroll>"Enroll now"</button>
                    </header>
                    <p class="detail-description">{c.description}</p>
                    {list_section("What you'll learn", c.what_you_learn)}
                    {list_section("Prerequisites", c.prerequisites)}
                }
                    .into_any(),
            }}
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
