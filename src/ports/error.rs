//! Backend client errors.
//!
//! One taxonomy for every REST surface: expired sessions, missing
//! resources, transport failures, and non-2xx backend answers are kept
//! distinguishable so callers can decide between aborting, retrying,
//! and degrading to a placeholder.

use thiserror::Error;

/// Errors from the GEMEX REST backend.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Expired or invalid bearer token; never retried.
    #[error("authentication failed")]
    Auth,

    /// Backend 404.
    #[error("resource not found: {resource}")]
    NotFound {
        /// What was looked up (path or entity description).
        resource: String,
    },

    /// Network failure before any HTTP status was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx, non-404, non-401 status.
    #[error("backend error: status {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ApiError {
    /// Creates a not-found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) | ApiError::Timeout { .. } => true,
            ApiError::Server { status } => *status >= 500,
            _ => false,
        }
    }
}
