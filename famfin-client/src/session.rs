//! Session store: the single owner of the signed-in identity.
//!
//! The store is constructed once at bootstrap, rehydrated from durable
//! storage, and handed to every consumer. All mutation goes through its
//! methods; each one persists the new state before returning.

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use serde::{Deserialize, Serialize};
use shared::models::User;
use tracing::{debug, info, instrument, warn};

use crate::{api::ProfileSource, storage::SharedStorage};

/// Authentication status of the current browser or terminal.
///
/// "Authenticated without a user" cannot be represented: the flag is derived
/// from the identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No identity; protected pages need a session check.
    #[default]
    SignedOut,
    /// A session check is in flight, or the identity was vouched for but
    /// its profile has not been loaded yet. The identity held before the
    /// check stays in place until the result arrives.
    Verifying { previous: Option<User> },
    /// A verified or rehydrated identity.
    SignedIn(User),
}

/// Snapshot of the session handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    status: SessionStatus,
}

impl SessionState {
    #[must_use]
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Current identity, including the one kept while a check is in flight.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.status {
            SessionStatus::SignedIn(user) => Some(user),
            SessionStatus::Verifying { previous } => previous.as_ref(),
            SessionStatus::SignedOut => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// `true` only while [`SessionStatus::Verifying`].
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SessionStatus::Verifying { .. })
    }

    /// Replace the identity; authenticated exactly when `user` is `Some`.
    pub fn set_user(&mut self, user: Option<User>) {
        self.status = match user {
            Some(user) => SessionStatus::SignedIn(user),
            None => SessionStatus::SignedOut,
        };
    }

    /// Override the authentication flag.
    ///
    /// `false` drops any identity. `true` keeps a loaded identity, and
    /// without one moves to [`SessionStatus::Verifying`] until a profile
    /// arrives.
    pub fn set_is_authenticated(&mut self, authenticated: bool) {
        if !authenticated {
            self.status = SessionStatus::SignedOut;
        } else if !self.is_authenticated() {
            self.status = SessionStatus::Verifying { previous: None };
        }
    }

    /// Forget the identity.
    pub fn logout(&mut self) {
        self.status = SessionStatus::SignedOut;
    }

    fn begin_check(&mut self) {
        let previous = match std::mem::take(&mut self.status) {
            SessionStatus::SignedIn(user) => Some(user),
            SessionStatus::Verifying { previous } => previous,
            SessionStatus::SignedOut => None,
        };
        self.status = SessionStatus::Verifying { previous };
    }

    fn finish_check(&mut self, verified: Option<User>) {
        self.set_user(verified);
    }

    /// Durable form of this state. A check in flight persists the identity
    /// held before it; the loading indicator is never written.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            state: PersistedState {
                user: self.user().cloned(),
                is_authenticated: self.is_authenticated(),
            },
            version: PersistedSession::VERSION,
        }
    }

    /// Rebuild state from its durable form. Loading never survives, and an
    /// identity is restored only when the entry also marks it authenticated.
    #[must_use]
    pub fn from_persisted(persisted: PersistedSession) -> Self {
        let PersistedState {
            user,
            is_authenticated,
        } = persisted.state;
        let mut state = Self::default();
        state.set_user(user.filter(|_| is_authenticated));
        state
    }
}

/// Serialized session entry: `{"state": {"user", "isAuthenticated"}, "version"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedSession {
    pub const VERSION: u32 = 0;
}

/// Persisted subset of the session; the loading indicator is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub user: Option<User>,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// Shared handle on the session; clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<Mutex<SessionState>>,
    storage: SharedStorage,
    key: String,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open the store persisted under `key`, rehydrating any saved session.
    ///
    /// A missing, unreadable or malformed entry yields a signed-out store.
    pub fn open(storage: SharedStorage, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = Self::rehydrate(storage.as_ref(), &key);
        debug!(key = %key, authenticated = state.is_authenticated(), "session store opened");
        Self {
            state: Arc::new(Mutex::new(state)),
            storage,
            key,
        }
    }

    fn rehydrate(storage: &dyn crate::storage::KeyValueStorage, key: &str) -> SessionState {
        let raw = match storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SessionState::default(),
            Err(err) => {
                warn!(error = %err, "failed to read persisted session");
                return SessionState::default();
            }
        };
        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => SessionState::from_persisted(persisted),
            Err(err) => {
                warn!(error = %err, "discarding malformed persisted session");
                SessionState::default()
            }
        }
    }

    /// Storage key of the persisted entry.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether two handles share the same underlying session.
    #[must_use]
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.snapshot().user().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.snapshot().is_loading()
    }

    /// See [`SessionState::set_user`].
    pub fn set_user(&self, user: Option<User>) {
        self.update(|state| state.set_user(user));
    }

    /// See [`SessionState::set_is_authenticated`].
    pub fn set_is_authenticated(&self, authenticated: bool) {
        self.update(|state| state.set_is_authenticated(authenticated));
    }

    /// Sign out locally. Server-side invalidation is not attempted.
    pub fn logout(&self) {
        info!("signing out");
        self.update(SessionState::logout);
    }

    /// Drop the persisted entry and reset to signed out.
    pub fn clear_storage(&self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = SessionState::default();
        if let Err(err) = self.storage.remove_item(&self.key) {
            warn!(error = %err, "failed to clear persisted session");
        }
    }

    /// Verify the session against the API.
    ///
    /// While the request is in flight the store reports loading and keeps
    /// the identity it already had. A success envelope with a profile signs in; every other outcome
    /// (rejected envelope, HTTP error, transport error) signs out. Never
    /// fails.
    #[instrument(skip_all)]
    pub async fn check_session<P>(&self, api: &P)
    where
        P: ProfileSource + ?Sized,
    {
        self.update(SessionState::begin_check);

        let verified = match api.fetch_profile().await {
            Ok(envelope) => {
                let user = envelope.into_success();
                if user.is_none() {
                    info!("profile request did not confirm the session");
                }
                user
            }
            Err(err) => {
                warn!(error = %err, "session check failed");
                None
            }
        };

        self.update(|state| state.finish_check(verified));
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            mutate(&mut state);
            state.clone()
        };
        self.persist(&snapshot);
    }

    fn persist(&self, state: &SessionState) {
        let result = serde_json::to_string(&state.to_persisted())
            .map_err(crate::error::StorageError::from)
            .and_then(|json| self.storage.set_item(&self.key, &json));
        if let Err(err) = result {
            warn!(error = %err, "failed to persist session");
        }
    }
}
