use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way, salted password hashing.
///
/// Internally Argon2id with the crate's secure defaults. Digests are PHC
/// strings embedding algorithm, parameters, and salt, so verification needs
/// no state beyond the digest itself. A fresh salt is drawn from `OsRng` on
/// every call: hashing the same password twice yields different digests.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password; not retained after this call
    ///
    /// # Returns
    /// PHC string digest, safe to persist
    ///
    /// # Errors
    /// * `HashingFailed` - Salt generation or the hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// The comparison is constant-time with respect to the password. A
    /// non-matching password is `Ok(false)`, never an error.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to check
    /// * `digest` - Stored PHC string digest
    ///
    /// # Errors
    /// * `VerificationFailed` - The digest is not a valid PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::VerificationFailed(format!("Invalid digest: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
