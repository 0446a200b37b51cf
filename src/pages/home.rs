//! Landing page with featured colleges, exams, and courses.

use leptos::prelude::*;

use crate::components::status::LoadingView;
use crate::content::Language;
use crate::net::types::{College, Course, Exam};
use crate::routes::{CONSULTANCY_PATH, ROADMAPS_PATH, college_path, course_path, language_path};
use crate::state::auth::SessionContext;
use crate::state::fetch::LoadState;
use crate::util::listing::{featured_colleges_query, featured_exams_query, popular_courses_query};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let colleges = RwSignal::new(LoadState::<Vec<College>>::Loading);
    let exams = RwSignal::new(LoadState::<Vec<Exam>>::Loading);
    let courses = RwSignal::new(LoadState::<Vec<Course>>::Loading);

    let api = session.api();
    leptos::task::spawn_local(async move {
        colleges.set(LoadState::from_result(api.colleges(&featured_colleges_query()).await.map(|e| e.data)));
        exams.set(LoadState::from_result(api.exams(&featured_exams_query()).await.map(|e| e.data)));
        courses.set(LoadState::from_result(api.courses(&popular_courses_query()).await.map(|e| e.data)));
    });

    let greeting = move || {
        session.with(|s| match s.user() {
            Some(user) => format!("Welcome back, {}!", user.name),
            None => "Learn, prepare, and plan your career.".to_owned(),
        })
    };

    view! {
        <section class="hero">
            <h1>"Vidhyardhi"</h1>
            <p>{greeting}</p>
            <div class="hero__actions">
                <a href=CONSULTANCY_PATH class="btn">"Find colleges"</a>
                <a href=ROADMAPS_PATH class="btn btn--ghost">"Career roadmaps"</a>
            </div>
        </section>

        <section class="home-section">
            <h2>"Learn a language"</h2>
            <div class="card-grid">
                {Language::ALL
                    .into_iter()
                    .map(|language| {
                        view! {
                            <a class="card" href=language_path(language)>
                                <h3>{language.tutorial().title}</h3>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="home-section">
            <h2>"Featured colleges"</h2>
            {move || match colleges.get() {
                LoadState::Ready(list) => view! {
                    <div class="card-grid">
                        {list
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <a class="card" href=college_path(&c.id)>
                                        <h3>{c.name}</h3>
                                        <p>{format!("{}, {}", c.location.city, c.location.state)}</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any(),
                LoadState::Loading => view! { <LoadingView/> }.into_any(),
                _ => ().into_any(),
            }}
        </section>

        <section class="home-section">
            <h2>"Upcoming exams"</h2>
            {move || {
                exams
                    .get()
                    .ready()
                    .cloned()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|exam| {
                        view! {
                            <div class="card">
                                <h3>{exam.name}</h3>
                                <span class="tag">{exam.category}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>

        <section class="home-section">
            <h2>"Popular courses"</h2>
            {move || {
                courses
                    .get()
                    .ready()
                    .cloned()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|course| {
                        view! {
                            <a class="card" href=course_path(&course.id)>
                                <h3>{course.title}</h3>
                                <p>{course.description}</p>
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
