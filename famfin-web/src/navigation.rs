//! Browser implementations of the session coordinator's navigation port.

use client::Navigator;
use yew_router::navigator::Navigator as RouterHandle;

use crate::routes::Route;

/// Full page loads through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Navigator for BrowserLocation {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window, cannot navigate to {path}");
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::error!("navigation to {path} failed: {err:?}");
        }
    }
}

/// In-app navigation through the router, with a full page load as fallback
/// when no router is mounted.
#[derive(Clone)]
pub struct RouterNavigator {
    router: Option<RouterHandle>,
}

impl RouterNavigator {
    pub fn new(router: Option<RouterHandle>) -> Self {
        Self { router }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        match &self.router {
            Some(router) => router.push(&Route::from_path(path)),
            None => BrowserLocation.navigate(path),
        }
    }

    fn hard_redirect(&self, path: &str) {
        BrowserLocation.navigate(path);
    }
}
