use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Opaque session token.
///
/// Identifies a live authenticated context; distinct from the user
/// identifier. Generated from a v4 UUID (122 random bits), so tokens are
/// collision-resistant and carry no ordering an attacker could extrapolate
/// from.
///
/// Inbound token values are wrapped as-is: a token is opaque, and an
/// unknown or malformed value simply fails session lookup rather than
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh, unguessable token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a token value received from a caller.
    ///
    /// No validation happens here; validity is a session-store question.
    pub fn from_string(token: String) -> Self {
        Self(token)
    }

    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let tokens: HashSet<SessionToken> =
            (0..1000).map(|_| SessionToken::generate()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_generate_is_not_sequential() {
        let first = SessionToken::generate();
        let second = SessionToken::generate();

        let shared_prefix = first
            .as_str()
            .chars()
            .zip(second.as_str().chars())
            .take_while(|(a, b)| a == b)
            .count();

        // Hyphenated v4 UUIDs agree on the version nibble at most; two
        // consecutive tokens sharing a long prefix would mean a predictable
        // generator.
        assert!(shared_prefix < 16);
    }

    #[test]
    fn test_token_length() {
        let token = SessionToken::generate();
        assert_eq!(token.as_str().len(), 36);
    }

    #[test]
    fn test_from_string_round_trip() {
        let token = SessionToken::generate();
        let echoed = SessionToken::from_string(token.as_str().to_string());
        assert_eq!(token, echoed);
    }

    #[test]
    fn test_serde_transparent() {
        let token = SessionToken::from_string("abc-123".to_string());
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }
}
