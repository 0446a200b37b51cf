use leptos::prelude::*;

use crate::routes::HOME_PATH;

/// Shown when a logged-in user lacks the role a route requires.
#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"403"</h1>
            <p>"You do not have access to this page."</p>
            <a href=HOME_PATH class="btn">"Back to home"</a>
        </div>
    }
}
