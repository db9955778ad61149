//! Backend error kinds and error value helpers.
//!
//! ```rust
//! use bbackend::BackendError;
//!
//! let auth = BackendError::authentication("session expired");
//! assert!(!auth.retryable);
//!
//! let timeout = BackendError::timeout("request timed out");
//! assert!(timeout.retryable);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    Network,
    Timeout,
    Authentication,
    NotFound,
    InvalidRequest,
    Unavailable,
    Api,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub kind: BackendErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Network, message, true)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Timeout, message, true)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Authentication, message, false)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::NotFound, message, false)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::InvalidRequest, message, false)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Unavailable, message, true)
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Api, message, false)
    }
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for BackendError {}
