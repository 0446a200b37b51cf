//! Reactive session handle shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read the session through this
//! handle. The signal is private, so views cannot assign session fields; all
//! writes go through the four `SessionStore` operations re-exposed here.

use leptos::prelude::*;

use super::session::{Session, SessionError, SessionStore};
use crate::config::ApiConfig;
use crate::net::api::{AuthApi, HttpApi};
use crate::net::types::{Credentials, ProfilePatch, Registration, UserProfile};
use crate::util::storage::BrowserStorage;

/// `Copy` handle over the single session signal and the API client.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    api: StoredValue<HttpApi>,
}

impl SessionContext {
    /// Restore the persisted session synchronously and provide the handle as
    /// context. Runs once, before the router renders anything.
    pub fn provide(config: ApiConfig) -> Self {
        let store = SessionStore::initialize(BrowserStorage);
        let ctx = Self {
            session: RwSignal::new(store.into_session()),
            api: StoredValue::new(HttpApi::new(config)),
        };
        provide_context(ctx);
        ctx
    }

    /// Tracked snapshot of the session.
    pub fn get(&self) -> Session {
        self.session.get()
    }

    /// Tracked borrow of the session.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.session.with(f)
    }

    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.session.with_untracked(f)
    }

    /// Current bearer credential, untracked.
    pub fn credential(&self) -> Option<String> {
        self.session.with_untracked(|s| s.credential().map(str::to_owned))
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    fn store(&self) -> SessionStore<BrowserStorage> {
        SessionStore::resume(BrowserStorage, self.session.get_untracked())
    }

    fn commit(&self, store: SessionStore<BrowserStorage>) {
        self.session.set(store.into_session());
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(self, credentials: Credentials) -> Result<UserProfile, SessionError> {
        let api = self.api();
        let mut store = self.store();
        let user = store.login(&api, &credentials).await?;
        self.commit(store);
        Ok(user)
    }

    /// # Errors
    ///
    /// See [`SessionStore::register`].
    pub async fn register(self, registration: Registration) -> Result<UserProfile, SessionError> {
        let api = self.api();
        let mut store = self.store();
        let user = store.register(&api, &registration).await?;
        self.commit(store);
        Ok(user)
    }

    /// # Errors
    ///
    /// See [`SessionStore::update_user`]. The response is checked against the
    /// live session after the request, so a logout or re-login in the
    /// meantime drops it instead of resurrecting the old user.
    pub async fn update_user(self, patch: ProfilePatch) -> Result<UserProfile, SessionError> {
        let api = self.api();
        let credential = self.store().begin_update()?;
        let result = api.update_profile(&credential, &patch).await;
        let mut store = self.store();
        let user = store.finish_update(&credential, result)?;
        self.commit(store);
        Ok(user)
    }

    /// Clear the session everywhere and hard-navigate to the login page so no
    /// mounted view keeps state from the old session.
    pub fn logout(self) {
        let mut store = self.store();
        let target = store.logout();
        self.commit(store);
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(target);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = target;
        }
    }
}
