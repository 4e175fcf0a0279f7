//! Process-wide reaction to HTTP 401.

use std::{fmt, sync::Arc};

use tracing::{info, warn};

use crate::{
    navigation::{LOGIN_PATH, Navigator},
    storage::{SharedStorage, TOKEN_KEY},
};

/// Navigator usable from inside the shared HTTP client.
pub type SharedNavigator = Arc<dyn Navigator + Send + Sync>;

/// Clears the stored auth token and forces a full navigation to the login
/// page, whichever call triggered the 401.
#[derive(Clone)]
pub struct UnauthorizedInterceptor {
    tokens: SharedStorage,
    navigator: SharedNavigator,
}

impl UnauthorizedInterceptor {
    pub fn new(tokens: SharedStorage, navigator: SharedNavigator) -> Self {
        Self { tokens, navigator }
    }

    /// Run the 401 policy.
    pub fn handle(&self) {
        if let Err(err) = self.tokens.remove_item(TOKEN_KEY) {
            warn!(error = %err, "failed to clear auth token after 401");
        }
        info!(target_path = LOGIN_PATH, "session rejected by API, redirecting to login");
        self.navigator.hard_redirect(LOGIN_PATH);
    }
}

impl fmt::Debug for UnauthorizedInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedInterceptor").finish_non_exhaustive()
    }
}
