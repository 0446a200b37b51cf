//! Guarded route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's view and swaps it for a router redirect whenever the
//! session no longer satisfies the route's access rule. The decision is a
//! memo over the session signal, so it re-runs on login, logout, and profile
//! changes without any cached outcome.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::Access;
use crate::state::auth::SessionContext;
use crate::util::auth::{GuardDecision, evaluate};

/// Render `children` only when the session satisfies `access`
/// (default: any logged-in user).
#[component]
pub fn ProtectedRoute(#[prop(optional)] access: Option<Access>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let access = access.unwrap_or(Access::Authenticated);
    let decision = Memo::new(move |_| session.with(|s| evaluate(s, &access)));

    move || match decision.get() {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(target) => {
            leptos::logging::log!("guard: redirecting to {target}");
            view! { <Redirect path=target/> }.into_any()
        }
    }
}
