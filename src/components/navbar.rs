//! Top navigation bar with session-aware account controls.

use leptos::prelude::*;

use crate::content::Language;
use crate::routes::{
    CONSULTANCY_PATH, FOR_CODERS_PATH, FOR_STUDENTS_PATH, HOME_PATH, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH,
    ROADMAPS_PATH, language_path,
};
use crate::state::auth::SessionContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let menu_open = RwSignal::new(false);

    let user_name = move || session.with(|s| s.user().map(|u| u.name.clone()));

    view! {
        <header class="navbar-header">
            <nav class="navbar">
                <a href=HOME_PATH class="navbar__brand">"Vidhyardhi"</a>
                <button class="navbar__toggle" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    "☰"
                </button>
                <ul class="navbar__links" class:open=move || menu_open.get()>
                    <li><a href=HOME_PATH>"Home"</a></li>
                    <li><a href=FOR_CODERS_PATH>"For Coders"</a></li>
                    <li><a href=FOR_STUDENTS_PATH>"For Students"</a></li>
                    <li><a href=ROADMAPS_PATH>"Roadmaps"</a></li>
                    <li><a href=CONSULTANCY_PATH>"Consultancy"</a></li>
                    <li class="navbar__dropdown">
                        <span>"Tutorials"</span>
                        <ul>
                            {Language::ALL
                                .into_iter()
                                .map(|language| {
                                    view! {
                                        <li>
                                            <a href=language_path(language)>{language.tutorial().title}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </li>
                </ul>
                <div class="navbar__account">
                    {move || match user_name() {
                        Some(name) => view! {
                            <a href=PROFILE_PATH class="navbar__user">{name}</a>
                            <button class="btn btn--ghost" on:click=move |_| session.logout()>"Logout"</button>
                        }
                            .into_any(),
                        None => view! {
                            <a href=LOGIN_PATH class="btn btn--ghost">"Login"</a>
                            <a href=REGISTER_PATH class="btn">"Sign up"</a>
                        }
                            .into_any(),
                    }}
                </div>
            </nav>
        </header>
    }
}
