//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded view applies the same rule. `evaluate` is pure; the
//! `ProtectedRoute` component re-runs it whenever the session signal changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::{Access, FORBIDDEN_PATH, LOGIN_PATH};
use crate::state::session::Session;

/// Whether a view may render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide access. Logged-out users go to the login page; logged-in users
/// without the required role go to the forbidden page.
pub fn evaluate(session: &Session, access: &Access) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Allow,
        _ if !session.is_authenticated() => GuardDecision::Redirect(LOGIN_PATH),
        Access::Authenticated => GuardDecision::Allow,
        Access::Role(required) if session.role() == Some(required) => GuardDecision::Allow,
        Access::Role(_) => GuardDecision::Redirect(FORBIDDEN_PATH),
    }
}

/// Credential for an action that needs a login, or the message to show instead.
///
/// # Errors
///
/// Returns `message` unchanged when nobody is logged in.
pub fn require_credential(session: &Session, message: &'static str) -> Result<String, &'static str> {
    session.credential().map(str::to_owned).ok_or(message)
}
