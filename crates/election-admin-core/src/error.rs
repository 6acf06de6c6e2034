//! Error Types
//!
//! Failures the dashboard can surface. Validation problems never become an
//! `AdminError`; they stay per-field in `FieldErrors` and block the request.

use thiserror::Error;

/// Common result type for service and configuration calls
pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors raised while talking to the backend or loading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("request failed ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// A 2xx response whose body could not be decoded
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Invalid dashboard configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AdminError {
    /// Text shown to the user in an error notification.
    ///
    /// Backend messages are passed through untouched since they are written
    /// for humans; the other variants keep their prefix for context.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
