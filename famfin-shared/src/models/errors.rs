use serde::{Deserialize, Serialize};

/// Error body returned by the REST API on non-2xx responses.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional machine-readable error name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Best-effort extraction of the message from a raw response body.
    ///
    /// Falls back to the trimmed body text when it is not a JSON error
    /// object, and to `None` when the body is empty.
    #[must_use]
    pub fn message_from_body(body: &str) -> Option<String> {
        if let Ok(parsed) = serde_json::from_str::<Self>(body) {
            return Some(parsed.message);
        }
        let trimmed = body.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{}: {}", error, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
