//! Searchable topic list for a language tutorial.

use leptos::prelude::*;

use crate::content::Language;
use crate::routes::topic_path;

#[component]
pub fn TopicSidebar(language: Language, #[prop(into)] active: Signal<Option<String>>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let tutorial = language.tutorial();

    view! {
        <aside class="topic-sidebar">
            <h3>{format!("{} Tutorial", tutorial.title)}</h3>
            <input
                class="topic-sidebar__search"
                type="search"
                placeholder="Search topics..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ul>
                {move || {
                    let hits = query.with(|q| tutorial.search(q));
                    if hits.is_empty() {
                        return view! { <li class="topic-sidebar__empty">"No topics match."</li> }.into_any();
                    }
                    hits.into_iter()
                        .map(|topic| {
                            let is_active = active.with(|a| a.as_deref() == Some(topic.slug));
                            view! {
                                <li class:active=is_active>
                                    <a href=topic_path(language, topic.slug, None)>{topic.title}</a>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}
