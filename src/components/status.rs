//! Loading, error, and not-found placeholders shared by data-backed pages.

use leptos::prelude::*;

#[component]
pub fn LoadingView(#[prop(into, default = "Loading...".to_owned())] message: String) -> impl IntoView {
    view! {
        <div class="loader-container">
            <div class="loader-spinner"></div>
            <p class="loader-text">{message}</p>
        </div>
    }
}

#[component]
pub fn ErrorView(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="status-message status-message--error">{message}</div> }
}

/// Explicit "nothing here" message; `what` names the missing thing.
#[component]
pub fn NotFoundView(#[prop(into)] what: String, #[prop(optional, into)] back_href: Option<String>) -> impl IntoView {
    view! {
        <div class="status-message status-message--not-found">
            <h2>{format!("{what} not found")}</h2>
            {back_href.map(|href| view! { <a href=href class="btn">"Go back"</a> })}
        </div>
    }
}
