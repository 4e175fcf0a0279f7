//! Terminal renditions of the navigation and notification ports.

use client::{
    NoticeLevel, Navigator, Notifier,
    navigation::{DASHBOARD_PATH, LOGIN_PATH},
};
use tracing::info;

/// There are no pages in a terminal; a navigation becomes a hint about
/// what to run next.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        info!(path, "navigation requested");
        match path {
            LOGIN_PATH => {
                eprintln!("Not signed in. Run `famfin session login --cookie <NAME=VALUE>`.");
            }
            DASHBOARD_PATH => eprintln!("Signed in."),
            _ => {}
        }
    }

    fn hard_redirect(&self, path: &str) {
        if path == LOGIN_PATH {
            eprintln!("The API rejected the session; the stored token was cleared.");
        }
        self.navigate(path);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        eprintln!("{level}: {message}");
    }
}
