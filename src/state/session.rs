//! Session store: who is logged in, and with which credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the only writer of session state. Route guards and views read
//! it; `login`, `register`, `logout` and `update_user` are the only mutators.
//! Every successful mutation is mirrored to durable storage before it returns,
//! so a reload immediately afterwards reconstructs the same session.
//!
//! INVARIANTS
//! ==========
//! - A user is present iff a credential is present (`Session::current`).
//! - Storage holds both `token` and `user`, or neither.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credentials, ProfilePatch, Registration, Role, UserProfile};
use crate::routes::LOGIN_PATH;
use crate::util::storage::{KeyValueStore, StorageError};

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized profile.
pub const USER_KEY: &str = "user";

/// A failed session mutation. The session is unchanged whenever one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("authentication succeeded but no token was issued")]
    MissingCredential,

    #[error("not logged in")]
    NotAuthenticated,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Clone, Debug, PartialEq)]
struct Authenticated {
    user: UserProfile,
    credential: String,
}

/// In-memory view of the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    current: Option<Authenticated>,
}

impl Session {
    /// The logged-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.current.as_ref().map(|a| &a.user)
    }

    pub fn credential(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.credential.as_str())
    }

    pub fn role(&self) -> Option<&Role> {
        self.user().map(|u| &u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

/// Owner of the session and its durable mirror.
#[derive(Debug)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the persisted session, or start anonymous.
    ///
    /// A missing key, an unparseable profile, or only one of the two keys all
    /// count as "no session"; leftovers are erased so storage matches memory.
    pub fn initialize(storage: S) -> Self {
        let session = restore(&storage);
        if !session.is_authenticated()
            && (storage.get(TOKEN_KEY).is_some() || storage.get(USER_KEY).is_some())
        {
            leptos::logging::warn!("session: discarding incomplete or malformed stored session");
            clear(&storage);
        }
        if let Some(user) = session.user() {
            leptos::logging::log!("session: restored user={} role={}", user.name, user.role);
        }
        Self { storage, session }
    }

    /// Rebuild a store around an already-restored session.
    pub(crate) fn resume(storage: S, session: Session) -> Self {
        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Authenticate and establish a session.
    ///
    /// # Errors
    ///
    /// Returns the API failure, `MissingCredential` when the response has no
    /// token, or a storage error; the session is unchanged in every case.
    pub async fn login<A: AuthApi + ?Sized>(
        &mut self,
        api: &A,
        credentials: &Credentials,
    ) -> Result<UserProfile, SessionError> {
        let response = api.login(credentials).await.inspect_err(|e| {
            leptos::logging::warn!("session: login rejected: {e}");
        })?;
        self.establish(response)
    }

    /// Create an account and establish a session for it.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub async fn register<A: AuthApi + ?Sized>(
        &mut self,
        api: &A,
        registration: &Registration,
    ) -> Result<UserProfile, SessionError> {
        let response = api.register(registration).await.inspect_err(|e| {
            leptos::logging::warn!("session: registration rejected: {e}");
        })?;
        self.establish(response)
    }

    /// Drop the session from memory and storage. Returns the path the caller
    /// must hard-navigate to.
    pub fn logout(&mut self) -> &'static str {
        clear(&self.storage);
        self.session = Session::anonymous();
        leptos::logging::log!("session: logged out");
        LOGIN_PATH
    }

    /// Push a profile change and adopt the server's returned profile.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` without calling the API when logged out; otherwise
    /// the API failure or a storage error, leaving the session unchanged.
    pub async fn update_user<A: AuthApi + ?Sized>(
        &mut self,
        api: &A,
        patch: &ProfilePatch,
    ) -> Result<UserProfile, SessionError> {
        let credential = self.begin_update()?;
        let result = api.update_profile(&credential, patch).await;
        self.finish_update(&credential, result)
    }

    /// Credential to send with a profile update.
    ///
    /// # Errors
    ///
    /// `NotAuthenticated` when logged out.
    pub fn begin_update(&self) -> Result<String, SessionError> {
        self.session
            .credential()
            .map(str::to_owned)
            .ok_or(SessionError::NotAuthenticated)
    }

    /// Apply a profile update issued with `credential`.
    ///
    /// The result is dropped without touching storage when the session that
    /// issued it has since ended or been replaced.
    ///
    /// # Errors
    ///
    /// The API failure, `NotAuthenticated` for a dropped result, or a storage
    /// error; the session is unchanged in every case.
    pub fn finish_update(
        &mut self,
        credential: &str,
        result: Result<UserProfile, ApiError>,
    ) -> Result<UserProfile, SessionError> {
        let user = result.inspect_err(|e| {
            leptos::logging::warn!("session: profile update rejected: {e}");
        })?;
        if self.session.credential() != Some(credential) {
            leptos::logging::warn!("session: dropping profile update for a session that has ended");
            return Err(SessionError::NotAuthenticated);
        }
        self.replace_user(user)
    }

    /// Adopt a login/register response.
    pub(crate) fn establish(&mut self, response: AuthResponse) -> Result<UserProfile, SessionError> {
        let credential = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or(SessionError::MissingCredential)?;
        let user = response.user;
        persist_pair(&self.storage, &credential, &user)?;
        leptos::logging::log!("session: established user={} role={}", user.name, user.role);
        self.session = Session {
            current: Some(Authenticated { user: user.clone(), credential }),
        };
        Ok(user)
    }

    /// Swap in a fresh profile, keeping the credential.
    pub(crate) fn replace_user(&mut self, user: UserProfile) -> Result<UserProfile, SessionError> {
        let Some(current) = self.session.current.as_mut() else {
            return Err(SessionError::NotAuthenticated);
        };
        let raw = encode_user(&user)?;
        self.storage.set(USER_KEY, &raw)?;
        current.user = user.clone();
        leptos::logging::log!("session: profile updated user={}", user.name);
        Ok(user)
    }
}

fn restore<S: KeyValueStore>(storage: &S) -> Session {
    let Some(credential) = storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
        return Session::anonymous();
    };
    let Some(raw) = storage.get(USER_KEY) else {
        return Session::anonymous();
    };
    match serde_json::from_str::<UserProfile>(&raw) {
        Ok(user) => Session { current: Some(Authenticated { user, credential }) },
        Err(e) => {
            leptos::logging::warn!("session: stored user is malformed: {e}");
            Session::anonymous()
        }
    }
}

fn clear<S: KeyValueStore>(storage: &S) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

fn encode_user(user: &UserProfile) -> Result<String, SessionError> {
    serde_json::to_string(user)
        .map_err(|e| SessionError::Api(ApiError::Decode(format!("profile not serializable: {e}"))))
}

/// Write both keys, or neither: the first key is rolled back if the second fails.
fn persist_pair<S: KeyValueStore>(storage: &S, credential: &str, user: &UserProfile) -> Result<(), SessionError> {
    let raw = encode_user(user)?;
    let previous_user = storage.get(USER_KEY);
    storage.set(USER_KEY, &raw)?;
    if let Err(e) = storage.set(TOKEN_KEY, credential) {
        match previous_user {
            Some(prev) => {
                if let Err(rollback) = storage.set(USER_KEY, &prev) {
                    leptos::logging::warn!("session: rollback of `{USER_KEY}` failed: {rollback}");
                }
            }
            None => storage.remove(USER_KEY),
        }
        return Err(e.into());
    }
    Ok(())
}
