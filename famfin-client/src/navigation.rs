//! Navigation seam between the session logic and whatever hosts it.

use std::sync::Arc;

/// Login page; every failed verification ends here.
pub const LOGIN_PATH: &str = "/auth/login";

/// Entry point of the protected area.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Landing page of the external (social) login round trip.
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Moves the user to another page.
pub trait Navigator {
    /// Client-side navigation that keeps in-memory state.
    fn navigate(&self, path: &str);

    /// Full navigation that reloads the application.
    fn hard_redirect(&self, path: &str) {
        self.navigate(path);
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }

    fn hard_redirect(&self, path: &str) {
        (**self).hard_redirect(path);
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }

    fn hard_redirect(&self, path: &str) {
        (**self).hard_redirect(path);
    }
}
