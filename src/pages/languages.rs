//! Nested tutorial routes: `/languages/:language[/:slug[/:subslug]]`.
//!
//! ARCHITECTURE
//! ============
//! `LanguageLayout` owns the sidebar and an `Outlet`. A bare language path
//! renders `LanguageIndex`, which redirects through `routes::resolve` to the
//! tutorial's first topic. `TopicPage` resolves slugs against the compiled
//! catalog and renders an explicit not-found message for unknown ones.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::markdown_view::{CodeBlock, MarkdownView};
use crate::components::quiz_block::QuizBlock;
use crate::components::status::NotFoundView;
use crate::components::topic_sidebar::TopicSidebar;
use crate::content::{Language, Topic, TopicLookup};
use crate::pages::not_found::NotFoundPage;
use crate::routes::{Resolution, resolve, topic_path};

fn use_language() -> Memo<Option<Language>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("language").as_deref().and_then(Language::from_slug)))
}

#[component]
pub fn LanguageLayout() -> impl IntoView {
    let language = use_language();
    let params = use_params_map();
    let active = Signal::derive(move || params.with(|p| p.get("slug")));

    move || match language.get() {
        Some(language) => view! {
            <div class="language-layout">
                <TopicSidebar language active/>
                <main class="language-content">
                    <Outlet/>
                </main>
            </div>
        }
            .into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

/// Bare `/languages/:language`: redirect once to the default topic.
#[component]
pub fn LanguageIndex() -> impl IntoView {
    let location = use_location();
    move || match resolve(&location.pathname.get()) {
        Resolution::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
        _ => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
pub fn TopicPage() -> impl IntoView {
    let language = use_language();
    let params = use_params_map();

    move || {
        let Some(language) = language.get() else {
            return view! { <NotFoundPage/> }.into_any();
        };
        let (slug, subslug) = params.with(|p| (p.get("slug").unwrap_or_default(), p.get("subslug")));
        match language.tutorial().lookup(&slug, subslug.as_deref()) {
            TopicLookup::Topic(topic) => view! { <TopicView language topic/> }.into_any(),
            TopicLookup::SubTopic { topic, subtopic } => view! {
                <article class="topic">
                    <nav class="breadcrumb">
                        <a href=topic_path(language, topic.slug, None)>{topic.title}</a>
                        " / "
                        <span>{subtopic.title}</span>
                    </nav>
                    <h1>{subtopic.title}</h1>
                    <MarkdownView source=subtopic.body/>
                    {subtopic.code.map(|code| view! { <CodeBlock code/> })}
                </article>
            }
                .into_any(),
            TopicLookup::NotFound { key } => {
                leptos::logging::warn!("tutorial: no {} topic for {key}", language.slug());
                view! { <NotFoundView what=format!("Topic \"{key}\"")/> }.into_any()
            }
        }
    }
}

#[component]
fn TopicView(language: Language, topic: &'static Topic) -> impl IntoView {
    let (prev, next) = language.tutorial().neighbors(topic.slug);

    view! {
        <article class="topic">
            <h1>{topic.title}</h1>
            <MarkdownView source=topic.body/>
            {topic.inshort.map(|text| view! { <div class="inshort"><strong>"In short: "</strong>{text}</div> })}
            {topic.code.map(|code| view! { <CodeBlock code/> })}
            <Show when=move || !topic.subtopics.is_empty()>
                <ul class="subtopics">
                    {topic
                        .subtopics
                        .iter()
                        .map(|sub| {
                            view! {
                                <li>
                                    <a href=topic_path(language, topic.slug, Some(sub.slug))>{sub.title}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
            <QuizBlock questions=topic.quiz/>
            <footer class="topic-nav">
                {prev.map(|t| view! { <a class="btn btn--ghost" href=topic_path(language, t.slug, None)>"← " {t.title}</a> })}
                {next.map(|t| view! { <a class="btn" href=topic_path(language, t.slug, None)>{t.title} " →"</a> })}
            </footer>
        </article>
    }
}
