use thiserror::Error;

/// Error type for password digest operations.
///
/// `VerificationFailed` means the stored digest could not be interpreted,
/// not that the password was wrong — a wrong password is a normal `false`
/// result from verification.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
