//! Completion of the external (social) login round trip.

use tracing::{error, info};

use crate::{
    api::ProfileSource,
    error::ClientError,
    navigation::{DASHBOARD_PATH, LOGIN_PATH, Navigator},
    notify::Notifier,
    session::SessionStore,
};

/// Message shown when the callback cannot confirm the login.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// How the callback visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The profile was confirmed and stored; navigated to the success page.
    SignedIn,
    /// The user was notified and sent back to the login page.
    Failed,
}

/// One-shot resolver for a callback page visit.
///
/// [`Self::resolve`] consumes the resolver, so a visit performs exactly one
/// profile fetch and never retries; the user restarts the login instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackResolver {
    success_path: String,
    failure_path: String,
}

impl Default for CallbackResolver {
    fn default() -> Self {
        Self::new(DASHBOARD_PATH, LOGIN_PATH)
    }
}

impl CallbackResolver {
    pub fn new(success_path: impl Into<String>, failure_path: impl Into<String>) -> Self {
        Self {
            success_path: success_path.into(),
            failure_path: failure_path.into(),
        }
    }

    /// Fetch the profile, record it in `store` and navigate accordingly.
    pub async fn resolve<P, N, T>(
        self,
        store: &SessionStore,
        api: &P,
        navigator: &N,
        notifier: &T,
    ) -> CallbackOutcome
    where
        P: ProfileSource + ?Sized,
        N: Navigator + ?Sized,
        T: Notifier + ?Sized,
    {
        let failure = match api.fetch_profile().await {
            Ok(envelope) => match envelope.into_success() {
                Some(user) => {
                    info!(user_id = %user.id, "external login completed");
                    store.set_user(Some(user));
                    store.set_is_authenticated(true);
                    navigator.navigate(&self.success_path);
                    return CallbackOutcome::SignedIn;
                }
                None => ClientError::Rejected("profile was not returned".to_string()),
            },
            Err(err) => err,
        };

        error!(error = %failure, "external login callback failed");
        notifier.error(LOGIN_FAILED_MESSAGE);
        navigator.navigate(&self.failure_path);
        CallbackOutcome::Failed
    }
}
