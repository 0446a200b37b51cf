use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Fixtures
// =============================================================

#[derive(Default)]
struct MockApi {
    auth: RefCell<Option<Result<AuthResponse, ApiError>>>,
    profile: RefCell<Option<Result<UserProfile, ApiError>>>,
    calls: Cell<usize>,
    last_token: RefCell<Option<String>>,
}

impl MockApi {
    fn answering(response: AuthResponse) -> Self {
        let api = Self::default();
        *api.auth.borrow_mut() = Some(Ok(response));
        api
    }

    fn rejecting(message: &str) -> Self {
        let api = Self::default();
        *api.auth.borrow_mut() = Some(Err(ApiError::Rejected { status: 401, message: message.to_owned() }));
        api
    }

    fn next_auth(&self) -> Result<AuthResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.auth.borrow().clone().unwrap_or(Err(ApiError::Unavailable))
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.next_auth()
    }

    async fn register(&self, _registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.next_auth()
    }

    async fn update_profile(&self, token: &str, _patch: &ProfilePatch) -> Result<UserProfile, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.to_owned());
        self.profile.borrow().clone().unwrap_or(Err(ApiError::Unavailable))
    }
}

fn user(name: &str, role: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({ "name": name, "role": role })).unwrap()
}

fn auth_response(name: &str, role: &str, token: &str) -> AuthResponse {
    AuthResponse { token: Some(token.to_owned()), user: user(name, role) }
}

fn credentials() -> Credentials {
    Credentials { email: "test@example.com".to_owned(), password: "123456".to_owned() }
}

fn logged_in_store(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::initialize(storage.clone());
    let api = MockApi::answering(auth_response("Test", "student", "abc"));
    block_on(store.login(&api, &credentials())).unwrap();
    store
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_empty_storage_is_anonymous() {
    let store = SessionStore::initialize(MemoryStorage::new());
    assert_eq!(store.session(), &Session::anonymous());
    assert!(store.session().user().is_none());
    assert!(store.session().credential().is_none());
}

#[test]
fn initialize_restores_persisted_pair() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(USER_KEY, r#"{"name":"Test","role":"admin"}"#).unwrap();
    let store = SessionStore::initialize(storage);
    assert_eq!(store.session().credential(), Some("abc"));
    assert_eq!(store.session().role(), Some(&Role::Admin));
}

#[test]
fn initialize_discards_malformed_user() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();
    let store = SessionStore::initialize(storage.clone());
    assert!(!store.session().is_authenticated());
    assert!(storage.keys().is_empty());
}

#[test]
fn relogin_reports_token_failure_even_when_user_rollback_fails() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    let before = store.session().clone();
    storage.fail_writes_after(1);
    let api = MockApi::answering(auth_response("Other", "admin", "xyz"));

    let err = block_on(store.login(&api, &credentials())).unwrap_err();

    assert_eq!(err, SessionError::Storage(StorageError::Write { key: TOKEN_KEY.to_owned() }));
    assert_eq!(store.session(), &before);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn initialize_discards_token_without_user() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    let store = SessionStore::initialize(storage.clone());
    assert!(!store.session().is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn initialize_discards_user_without_token() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, r#"{"name":"Ghost"}"#).unwrap();
    let store = SessionStore::initialize(storage.clone());
    assert!(store.session().user().is_none());
    assert_eq!(storage.get(USER_KEY), None);
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_sets_session_and_persists_both_keys() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    let api = MockApi::answering(auth_response("Test", "student", "abc"));

    let returned = block_on(store.login(&api, &credentials())).unwrap();

    assert_eq!(returned.name, "Test");
    assert_eq!(store.session().user().map(|u| u.name.as_str()), Some("Test"));
    assert_eq!(store.session().credential(), Some("abc"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
    let stored: UserProfile = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored, returned);
}

#[test]
fn login_then_reload_reproduces_session() {
    let storage = MemoryStorage::new();
    let store = logged_in_store(&storage);
    let reloaded = SessionStore::initialize(storage);
    assert_eq!(reloaded.session(), store.session());
}

#[test]
fn login_failure_leaves_session_and_storage_unchanged() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    let api = MockApi::rejecting("Invalid credentials");

    let err = block_on(store.login(&api, &credentials())).unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!store.session().is_authenticated());
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn failed_relogin_keeps_previous_session() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    let before = store.session().clone();

    let api = MockApi::rejecting("Invalid credentials");
    assert!(block_on(store.login(&api, &credentials())).is_err());

    assert_eq!(store.session(), &before);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
}

#[test]
fn login_without_token_is_rejected() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    let api = MockApi::answering(AuthResponse { token: None, user: user("Test", "student") });

    let err = block_on(store.login(&api, &credentials())).unwrap_err();

    assert_eq!(err, SessionError::MissingCredential);
    assert!(store.session().user().is_none());
    assert!(storage.keys().is_empty());
}

#[test]
fn login_rolls_back_user_when_token_write_fails() {
    let storage = MemoryStorage::new();
    storage.fail_writes_to(TOKEN_KEY);
    let mut store = SessionStore::initialize(storage.clone());
    let api = MockApi::answering(auth_response("Test", "student", "abc"));

    let err = block_on(store.login(&api, &credentials())).unwrap_err();

    assert_eq!(err, SessionError::Storage(StorageError::Write { key: TOKEN_KEY.to_owned() }));
    assert!(!store.session().is_authenticated());
    assert!(storage.keys().is_empty());
}

#[test]
fn register_establishes_session_like_login() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    let api = MockApi::answering(auth_response("New", "student", "reg-token"));
    let registration = Registration {
        name: "New".to_owned(),
        email: "new@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone: None,
        role: None,
    };

    block_on(store.register(&api, &registration)).unwrap();

    assert_eq!(store.session().credential(), Some("reg-token"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("reg-token"));
}

#[test]
fn duplicate_registration_error_is_surfaced_verbatim() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    let api = MockApi::rejecting("User already exists");
    let registration = Registration {
        name: "Dup".to_owned(),
        email: "dup@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone: None,
        role: None,
    };
    let err = block_on(store.register(&api, &registration)).unwrap_err();
    assert_eq!(err.to_string(), "User already exists");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);

    let target = store.logout();

    assert_eq!(target, LOGIN_PATH);
    assert_eq!(store.session(), &Session::anonymous());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn repeated_login_logout_cycles_always_end_empty() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::initialize(storage.clone());
    for round in 0..3 {
        let api = MockApi::answering(auth_response("Test", "student", &format!("t{round}")));
        block_on(store.login(&api, &credentials())).unwrap();
        store.logout();
        assert!(!store.session().is_authenticated());
        assert!(storage.keys().is_empty());
    }
}

#[test]
fn logout_is_observed_by_every_reader_with_no_later_writes() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    store.logout();
    let writes_after_logout = storage.write_count();

    let readers: [fn(&Session) -> bool; 3] = [
        |s| s.user().is_none(),
        |s| s.credential().is_none(),
        |s| !s.is_authenticated(),
    ];
    for read in readers {
        assert!(read(store.session()));
    }
    assert_eq!(storage.write_count(), writes_after_logout);
}

// =============================================================
// update_user
// =============================================================

#[test]
fn update_user_replaces_profile_and_keeps_credential() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    let api = MockApi::default();
    *api.profile.borrow_mut() = Some(Ok(user("Renamed", "student")));
    let patch = ProfilePatch { name: Some("Renamed".to_owned()), ..ProfilePatch::default() };

    let updated = block_on(store.update_user(&api, &patch)).unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(api.last_token.borrow().as_deref(), Some("abc"));
    assert_eq!(store.session().credential(), Some("abc"));
    assert_eq!(store.session().user().map(|u| u.name.as_str()), Some("Renamed"));
    let reloaded = SessionStore::initialize(storage);
    assert_eq!(reloaded.session(), store.session());
}

#[test]
fn update_user_when_logged_out_skips_api() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    let api = MockApi::default();
    let err = block_on(store.update_user(&api, &ProfilePatch::default())).unwrap_err();
    assert_eq!(err, SessionError::NotAuthenticated);
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn update_user_failure_keeps_old_profile() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    let before = store.session().clone();
    let api = MockApi::default();
    *api.profile.borrow_mut() = Some(Err(ApiError::Rejected { status: 400, message: "Update failed".to_owned() }));

    let err = block_on(store.update_user(&api, &ProfilePatch::default())).unwrap_err();

    assert_eq!(err.to_string(), "Update failed");
    assert_eq!(store.session(), &before);
}

#[test]
fn update_finishing_after_logout_is_dropped_without_writes() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    let credential = store.begin_update().unwrap();
    store.logout();
    let writes = storage.write_count();

    let err = store.finish_update(&credential, Ok(user("Renamed", "student"))).unwrap_err();

    assert_eq!(err, SessionError::NotAuthenticated);
    assert_eq!(storage.write_count(), writes);
    assert!(storage.keys().is_empty());
    assert!(!store.session().is_authenticated());
    assert!(!SessionStore::initialize(storage).session().is_authenticated());
}

#[test]
fn update_finishing_after_relogin_keeps_the_new_user() {
    let storage = MemoryStorage::new();
    let mut store = logged_in_store(&storage);
    let credential = store.begin_update().unwrap();
    let api = MockApi::answering(auth_response("Other", "admin", "xyz"));
    block_on(store.login(&api, &credentials())).unwrap();
    let after_relogin = store.session().clone();
    let writes = storage.write_count();

    let err = store.finish_update(&credential, Ok(user("Renamed", "student"))).unwrap_err();

    assert_eq!(err, SessionError::NotAuthenticated);
    assert_eq!(storage.write_count(), writes);
    assert_eq!(store.session(), &after_relogin);
    assert_eq!(SessionStore::initialize(storage).session(), &after_relogin);
}

#[test]
fn begin_update_when_logged_out_is_rejected() {
    let store = SessionStore::initialize(MemoryStorage::new());
    assert_eq!(store.begin_update().unwrap_err(), SessionError::NotAuthenticated);
}

#[test]
fn resume_and_into_session_round_trip() {
    let storage = MemoryStorage::new();
    let store = logged_in_store(&storage);
    let session = store.into_session();
    let resumed = SessionStore::resume(storage, session.clone());
    assert_eq!(resumed.session(), &session);
}
