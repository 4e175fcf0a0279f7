//! Route-level gate for the protected area.
//!
//! For a protected path with no identity loaded, the guard runs one
//! session check and redirects to the login page unless it confirms the
//! session. A loaded identity (including one rehydrated from storage) is
//! trusted without a network call. Concurrent runs are not de-duplicated;
//! they converge on the same store state.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{debug, info};

use crate::{
    api::ProfileSource,
    navigation::{DASHBOARD_PATH, LOGIN_PATH, Navigator},
    session::{SessionState, SessionStore},
};

/// Prefix under which every page requires a verified session.
pub const PROTECTED_PREFIX: &str = DASHBOARD_PATH;

/// What the guarded subtree should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPhase {
    /// Verification outstanding: render the placeholder.
    Checking,
    /// Render children.
    Ready,
}

/// How a guard run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Show the protected content.
    Render,
    /// Verification failed; the navigator was sent to the login page.
    Redirected,
    /// The consumer was torn down before verification finished.
    Discarded,
}

/// Tracks whether the consumer that started a guard run still exists.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the consumer as gone; pending runs discard their result.
    pub fn teardown(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Auth guard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGuard {
    protected_prefix: String,
    login_path: String,
}

impl Default for AuthGuard {
    fn default() -> Self {
        Self::new(PROTECTED_PREFIX, LOGIN_PATH)
    }
}

impl AuthGuard {
    /// Guard everything under `protected_prefix`, sending failures to `login_path`.
    pub fn new(protected_prefix: impl Into<String>, login_path: impl Into<String>) -> Self {
        Self {
            protected_prefix: protected_prefix.into(),
            login_path: login_path.into(),
        }
    }

    /// `true` for the prefix itself and anything below it.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        path.strip_prefix(self.protected_prefix.as_str())
            .is_some_and(|rest| {
                rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')
            })
    }

    /// Whether `path` must wait for a session check given `session`.
    #[must_use]
    pub fn needs_verification(&self, path: &str, session: &SessionState) -> bool {
        self.is_protected(path) && session.user().is_none()
    }

    /// Phase to render before [`Self::run`] resolves.
    #[must_use]
    pub fn initial_phase(&self, path: &str, store: &SessionStore) -> GuardPhase {
        if self.needs_verification(path, &store.snapshot()) {
            GuardPhase::Checking
        } else {
            GuardPhase::Ready
        }
    }

    /// Evaluate the guard for `path`.
    ///
    /// The redirect decision is taken only after the session check has
    /// resolved. A rejected check is treated like a negative one.
    pub async fn run<P, N>(
        &self,
        path: &str,
        store: &SessionStore,
        api: &P,
        navigator: &N,
        liveness: &Liveness,
    ) -> GuardOutcome
    where
        P: ProfileSource + ?Sized,
        N: Navigator + ?Sized,
    {
        if !self.needs_verification(path, &store.snapshot()) {
            return GuardOutcome::Render;
        }

        debug!(path, "verifying session for protected path");
        store.check_session(api).await;

        if !liveness.is_alive() {
            debug!(path, "guard consumer gone, discarding verification result");
            return GuardOutcome::Discarded;
        }

        if store.is_authenticated() {
            GuardOutcome::Render
        } else {
            info!(path, "session not verified, redirecting to login");
            navigator.navigate(&self.login_path);
            GuardOutcome::Redirected
        }
    }
}
