//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ApiError`] - Failures reported by the JSON API
//! - [`RepositoryError`] - Storage failures while building a view page
//! - [`CryptoError`] - Password hashing failures
//! - [`StorageError`] - localStorage operations for settings

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection reset, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response; carries the status and the body text.
    #[error("HTTP error: {status}")]
    HttpError { status: u16, body: String },
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

/// Errors reported by (or while talking to) the JSON API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The API answered with an `{ "error": ... }` body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] FetchError),
}

impl ApiError {
    /// Build from a fetch failure, unwrapping API error bodies when present.
    pub fn from_fetch(err: FetchError) -> Self {
        if let FetchError::HttpError { status, body } = &err
            && let Ok(payload) = serde_json::from_str::<ErrorBody>(body)
        {
            return Self::Rejected {
                status: *status,
                message: payload.error,
            };
        }
        Self::Transport(err)
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(FetchError::HttpError { status, .. }) => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Storage failures raised by a view-page repository.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    Query(String),
}

/// Password hashing failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CryptoError {
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// localStorage errors for persisted settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize settings")]
    SerializationFailed,
    #[error("failed to save to localStorage")]
    SaveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unwraps_error_body() {
        let err = ApiError::from_fetch(FetchError::HttpError {
            status: 403,
            body: r#"{"error":"Incorrect password"}"#.to_string(),
        });
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 403,
                message: "Incorrect password".to_string()
            }
        );
        assert_eq!(err.to_string(), "Incorrect password");
    }

    #[test]
    fn test_api_error_keeps_opaque_failures() {
        let err = ApiError::from_fetch(FetchError::HttpError {
            status: 502,
            body: "<html>bad gateway</html>".to_string(),
        });
        assert!(matches!(
            err,
            ApiError::Transport(FetchError::HttpError { status: 502, .. })
        ));
        assert_eq!(err.status(), Some(502));

        let err = ApiError::from_fetch(FetchError::Timeout);
        assert_eq!(err.to_string(), "Request timed out");
        assert_eq!(err.status(), None);
    }
}
