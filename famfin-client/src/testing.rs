//! Test doubles shared by the unit test modules.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use shared::models::{ApiEnvelope, Role, User};

use crate::{
    api::ProfileSource,
    error::{ClientError, ClientResult},
    navigation::Navigator,
    notify::{NoticeLevel, Notifier},
};

pub fn sample_user() -> User {
    User {
        id: "u-42".to_string(),
        email: "ada@example.com".to_string(),
        name: "Ada Lovelace".to_string(),
        avatar: None,
        role: Role::Admin,
    }
}

/// Canned answer of a [`ScriptedProfile`].
#[derive(Debug, Clone)]
pub enum ProfileReply {
    Success(User),
    SuccessWithoutData,
    Rejected,
    Status(u16),
    Unauthorized,
}

/// Profile source that always answers with the same reply and counts calls.
pub struct ScriptedProfile {
    reply: ProfileReply,
    calls: AtomicUsize,
}

impl ScriptedProfile {
    pub fn new(reply: ProfileReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for ScriptedProfile {
    async fn fetch_profile(&self) -> ClientResult<ApiEnvelope<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            ProfileReply::Success(user) => Ok(ApiEnvelope::ok(user.clone())),
            ProfileReply::SuccessWithoutData => Ok(ApiEnvelope {
                success: true,
                data: None,
                message: None,
            }),
            ProfileReply::Rejected => Ok(ApiEnvelope::failure("session expired")),
            ProfileReply::Status(status) => Err(ClientError::Status {
                status: *status,
                message: "backend unavailable".to_string(),
            }),
            ProfileReply::Unauthorized => Err(ClientError::Unauthorized),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Soft(String),
    Hard(String),
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Navigation> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits
            .lock()
            .unwrap()
            .push(Navigation::Soft(path.to_string()));
    }

    fn hard_redirect(&self, path: &str) {
        self.visits
            .lock()
            .unwrap()
            .push(Navigation::Hard(path.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
