use super::*;
use crate::net::types::{AuthResponse, Role, UserProfile};
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

fn session_with_role(role: &str) -> Session {
    let user: UserProfile = serde_json::from_value(serde_json::json!({ "name": "Test", "role": role })).unwrap();
    let mut store = SessionStore::resume(MemoryStorage::new(), Session::anonymous());
    store.establish(AuthResponse { token: Some("abc".to_owned()), user }).unwrap();
    store.into_session()
}

#[test]
fn public_views_always_render() {
    assert_eq!(evaluate(&Session::anonymous(), &Access::Public), GuardDecision::Allow);
    assert_eq!(evaluate(&session_with_role("student"), &Access::Public), GuardDecision::Allow);
}

#[test]
fn anonymous_user_is_sent_to_login() {
    let session = Session::anonymous();
    assert_eq!(evaluate(&session, &Access::Authenticated), GuardDecision::Redirect("/login"));
    assert_eq!(evaluate(&session, &Access::Role(Role::Admin)), GuardDecision::Redirect("/login"));
}

#[test]
fn authenticated_user_passes_login_only_views() {
    assert_eq!(evaluate(&session_with_role("student"), &Access::Authenticated), GuardDecision::Allow);
}

#[test]
fn role_mismatch_redirects_even_when_logged_in() {
    let session = session_with_role("student");
    assert_eq!(evaluate(&session, &Access::Role(Role::Admin)), GuardDecision::Redirect("/forbidden"));
}

#[test]
fn matching_role_renders() {
    assert_eq!(evaluate(&session_with_role("admin"), &Access::Role(Role::Admin)), GuardDecision::Allow);
}

#[test]
fn decision_follows_the_session_not_a_cache() {
    let access = Access::Authenticated;
    let mut store = SessionStore::resume(MemoryStorage::new(), session_with_role("student"));
    assert_eq!(evaluate(store.session(), &access), GuardDecision::Allow);
    store.logout();
    assert_eq!(evaluate(store.session(), &access), GuardDecision::Redirect("/login"));
}

#[test]
fn actions_need_a_credential() {
    assert_eq!(
        require_credential(&Session::anonymous(), "Please login to follow this roadmap"),
        Err("Please login to follow this roadmap")
    );
    assert_eq!(require_credential(&session_with_role("student"), "unused"), Ok("abc".to_owned()));
}
