use std::fmt;

use credentials::SessionToken;

use crate::auth::errors::PasswordRuleError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Plaintext password accepted for registration.
///
/// Exists only between request parsing and hashing; the Debug impl is
/// redacted so the plaintext cannot leak through logs or error output.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Accept a password that satisfies the length rule.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordRuleError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PasswordRuleError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    /// Get the plaintext for the single hashing call frame.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to log in with raw credentials.
///
/// Deliberately untyped beyond non-emptiness: a username that would fail
/// today's registration rules must still be able to attempt a login and
/// receive the uniform invalid-credentials answer.
#[derive(Debug)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// A user together with the session token that authenticates them.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: SessionToken,
}

/// Outcome of a token check.
///
/// `Anonymous` is a normal state, not a failure: missing, expired, and
/// orphaned tokens all collapse into it.
#[derive(Debug, Clone)]
pub enum AuthStatus {
    Anonymous,
    Authenticated(User),
}
