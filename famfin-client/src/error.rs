use shared::config::client::ConfigError;
use thiserror::Error;

/// Result alias used across the client crate.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures surfaced by the HTTP client.
///
/// Session checks and the login callback never bubble these up; they fold
/// every variant into the signed-out state.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered 401; the global interceptor already ran.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The API answered 2xx with `success: false`.
    #[error("request rejected by the API: {0}")]
    Rejected(String),

    /// A 2xx envelope without the expected `data` payload.
    #[error("response is missing its data payload")]
    MissingData,

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request was refused locally before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    /// An endpoint URL could not be built from the configured base.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    /// Client construction failed because of bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Local persistence failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// HTTP status attached to the error, when there is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Failures of a [`crate::storage::KeyValueStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
