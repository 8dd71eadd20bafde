use serde::Serialize;
use thiserror::Error;

use crate::session::errors::SessionError;
use crate::user::errors::UserError;

/// Error for password rule violations at registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordRuleError {
    #[error("Password must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// A single field-level validation failure.
///
/// Validation reports one of these per offending field so the caller can
/// render per-field feedback instead of a single collapsed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Top-level error for authentication operations.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Client-fixable input problems, one entry per field.
    #[error("Validation failed for {0:?}")]
    Validation(Vec<FieldError>),

    /// Wrong password or unknown username; deliberately a single variant so
    /// the two causes stay indistinguishable to the caller.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Hashing infrastructure failure; fatal to the request.
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
