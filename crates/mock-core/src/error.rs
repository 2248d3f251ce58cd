//! # Mock Error Types
//!
//! Typed error handling for the mock payment dispatcher.
//! Every mock operation returns `Result<T, MockError>`.

use thiserror::Error;

/// Error type for all mock payment operations
#[derive(Debug, Error)]
pub enum MockError {
    /// Request body is not a JSON object
    #[error("Invalid JSON: {0}")]
    MalformedBody(String),

    /// Required identifying field absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Unexpected fault while building a response
    #[error("{operation} failed: {message}")]
    Internal {
        operation: &'static str,
        message: String,
    },
}

impl MockError {
    /// Build an internal fault attributed to `operation`
    pub fn internal(operation: &'static str, message: impl Into<String>) -> Self {
        MockError::Internal {
            operation,
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the caller
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MockError::MalformedBody(_) | MockError::MissingField(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            MockError::MalformedBody(_) => 400,
            MockError::MissingField(_) => 400,
            MockError::Internal { .. } => 500,
        }
    }
}

impl From<serde_json::Error> for MockError {
    fn from(err: serde_json::Error) -> Self {
        MockError::MalformedBody(err.to_string())
    }
}

/// Result type alias for mock operations
pub type MockResult<T> = Result<T, MockError>;
