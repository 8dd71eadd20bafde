use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Owned exclusively by the user store; every mutation goes through the
/// store's API, driven by the auth service. The password never appears here
/// in plaintext, only as a self-describing digest.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Surrounding whitespace is trimmed before validation; the trimmed value
/// must be 3-30 characters. Length is counted in characters, not bytes, so
/// non-ASCII names ("Алексей") are measured the way a user would count them.
/// No character-set restriction beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 30;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string; surrounding whitespace is dropped
    ///
    /// # Errors
    /// * `TooShort` - Trimmed username shorter than 3 characters
    /// * `TooLong` - Trimmed username longer than 30 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = username.trim().to_string();
        let length = username.chars().count();

        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username))
        }
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Comparison is
/// case-sensitive, matching the store's uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_trims_whitespace() {
        let username = Username::new("  Алексей  ".to_string()).unwrap();
        assert_eq!(username.as_str(), "Алексей");
    }

    #[test]
    fn test_username_length_counts_characters() {
        // 7 characters, 14 bytes in UTF-8; must pass the 3-30 rule
        assert!(Username::new("Алексей".to_string()).is_ok());
        // 2 characters after trim
        assert!(matches!(
            Username::new(" ab ".to_string()),
            Err(UsernameError::TooShort { min: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_username_too_long() {
        let raw = "x".repeat(31);
        assert!(matches!(
            Username::new(raw),
            Err(UsernameError::TooLong { max: 30, actual: 31 })
        ));
        assert!(Username::new("x".repeat(30)).is_ok());
    }

    #[test]
    fn test_whitespace_only_username_is_too_short() {
        assert!(matches!(
            Username::new("     ".to_string()),
            Err(UsernameError::TooShort { .. })
        ));
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("alexey@example.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        let parsed = UserId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_user_id_rejects_garbage() {
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
