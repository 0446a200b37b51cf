//! Admin area. Only the role gate is defined; the console itself is a placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::SessionContext;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let name = move || session.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <div class="status-page">
            <h1>"Admin"</h1>
            <p>{move || format!("Signed in as {}.", name())}</p>
            <p class="muted">{move || format!("No admin tools are available at {} yet.", location.pathname.get())}</p>
        </div>
    }
}
