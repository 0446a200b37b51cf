use leptos::prelude::*;

use crate::routes::HOME_PATH;

/// Fallback for paths outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href=HOME_PATH class="btn">"Back to home"</a>
        </div>
    }
}
