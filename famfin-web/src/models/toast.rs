use client::{NoticeLevel, Notifier};
use yewdux::{Dispatch, Store};

/// How long a toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Toast {
    pub fn alert_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "alert alert-info",
            NoticeLevel::Success => "alert alert-success",
            NoticeLevel::Error => "alert alert-error",
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// [`Notifier`] that raises toasts.
#[derive(Clone)]
pub struct ToastNotifier {
    dispatch: Dispatch<ToastState>,
}

impl ToastNotifier {
    pub fn new(dispatch: Dispatch<ToastState>) -> Self {
        Self { dispatch }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let message = message.to_string();
        self.dispatch.reduce_mut(move |state| {
            state.push(level, message);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut state = ToastState::default();
        let first = state.push(NoticeLevel::Error, "Login failed. Please try again.");
        let second = state.push(NoticeLevel::Success, "Member invited");

        assert!(second > first);
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].message, "Login failed. Please try again.");
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut state = ToastState::default();
        let first = state.push(NoticeLevel::Info, "one");
        let second = state.push(NoticeLevel::Info, "two");

        state.dismiss(first);

        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, second);

        state.dismiss(first);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_alert_class() {
        let mut state = ToastState::default();
        state.push(NoticeLevel::Error, "boom");

        assert_eq!(state.toasts[0].alert_class(), "alert alert-error");
    }
}
