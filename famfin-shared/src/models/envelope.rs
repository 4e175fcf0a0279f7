use serde::{Deserialize, Serialize};

/// Response wrapper used by the REST API: `{ success, data, message }`.
///
/// Not every endpoint sets every field; `GET /members` for instance only
/// returns `data`. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    /// Backend-reported outcome.
    #[serde(default)]
    pub success: bool,

    /// Payload, absent on failure.
    #[serde(default = "Option::default")]
    pub data: Option<T>,

    /// Optional human-readable message accompanying the outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A failed envelope with an explanatory message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// The payload when the backend reported success, `None` otherwise.
    pub fn into_success(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}
