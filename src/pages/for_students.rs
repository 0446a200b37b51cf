//! Exam listings and practice questions.

use leptos::prelude::*;

use crate::components::status::{ErrorView, LoadingView};
use crate::net::types::{Exam, Question};
use crate::state::auth::SessionContext;
use crate::state::fetch::{LoadState, RequestTracker, spawn_tracked};
use crate::util::listing::{ExamFilters, questions_query};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Exams,
    Practice,
}

#[component]
pub fn ForStudentsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let tab = RwSignal::new(Tab::default());
    let filters = RwSignal::new(ExamFilters::default());
    let exams = RwSignal::new(LoadState::<Vec<Exam>>::Loading);
    let questions = RwSignal::new(LoadState::<Vec<Question>>::Loading);
    let exam_tracker = StoredValue::new(RequestTracker::new());
    let question_tracker = StoredValue::new(RequestTracker::new());

    Effect::new(move || match tab.get() {
        Tab::Exams => {
            let query = filters.with(ExamFilters::query);
            let key = query.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");
            let api = session.api();
            spawn_tracked(exam_tracker, exams, key, async move { api.exams(&query).await.map(|e| e.data) });
        }
        Tab::Practice => {
            let api = session.api();
            let token = session.credential();
            spawn_tracked(question_tracker, questions, "practice", async move {
                api.questions(&questions_query(), token.as_deref()).await.map(|e| e.data)
            });
        }
    });

    let exams_view = move || match exams.get() {
        LoadState::Loading => view! { <LoadingView/> }.into_any(),
        LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
        LoadState::NotFound => view! { <ErrorView message="No exams found."/> }.into_any(),
        LoadState::Ready(list) => list
            .into_iter()
            .map(|exam| {
                view! {
                    <div class="card">
                        <h3>{exam.name}</h3>
                        <span class="tag">{exam.category}</span>
                        <span class="tag">{exam.level}</span>
                        <p>{exam.description}</p>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    let questions_view = move || match questions.get() {
        LoadState::Loading => view! { <LoadingView/> }.into_any(),
        LoadState::Failed(message) => view! { <ErrorView message/> }.into_any(),
        LoadState::NotFound => view! { <ErrorView message="No questions found."/> }.into_any(),
        LoadState::Ready(list) => view! {
            <ol class="question-list">
                {list
                    .into_iter()
                    .map(|q| view! { <li>{q.question} <span class="tag">{q.difficulty}</span></li> })
                    .collect_view()}
            </ol>
        }
            .into_any(),
    };

    view! {
        <div class="listing-page">
            <section class="hero hero--students">
                <h1>"Exam Preparation"</h1>
                <p>"Prepare for competitive exams with mock tests and practice questions"</p>
            </section>
            <div class="tabs">
                <button class="tab" class:active=move || tab.get() == Tab::Exams on:click=move |_| tab.set(Tab::Exams)>
                    "Exams"
                </button>
                <button
                    class="tab"
                    class:active=move || tab.get() == Tab::Practice
                    on:click=move |_| tab.set(Tab::Practice)
                >
                    "Practice"
                </button>
            </div>
            <Show
                when=move || tab.get() == Tab::Exams
                fallback=move || view! { <div class="practice">{questions_view}</div> }
            >
                <div class="filters">
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || filters.with(|f| f.category.clone())
                        on:input=move |ev| filters.update(|f| f.category = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Level"
                        prop:value=move || filters.with(|f| f.level.clone())
                        on:input=move |ev| filters.update(|f| f.level = event_target_value(&ev))
                    />
                </div>
                <div class="card-grid">{exams_view}</div>
            </Show>
        </div>
    }
}
