use chrono::DateTime;
use chrono::Utc;
use credentials::SessionToken;

use crate::domain::user::models::UserId;

/// Session record.
///
/// Maps a token to the user it authenticates and the instant that mapping
/// stops being valid. Holds the user id as a weak reference; the session
/// store never owns user records.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session has expired as of `now`.
    ///
    /// A session is valid strictly before `expires_at`; a zero TTL session
    /// is expired the moment it is created.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let session = Session {
            token: SessionToken::generate(),
            user_id: UserId::new(),
            created_at: now,
            expires_at: now + Duration::hours(24),
        };

        assert!(!session.is_expired_at(now));
        assert!(!session.is_expired_at(now + Duration::hours(24) - Duration::seconds(1)));
        // exactly at expires_at the session is no longer valid
        assert!(session.is_expired_at(now + Duration::hours(24)));
        assert!(session.is_expired_at(now + Duration::hours(25)));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let now = Utc::now();
        let session = Session {
            token: SessionToken::generate(),
            user_id: UserId::new(),
            created_at: now,
            expires_at: now,
        };

        assert!(session.is_expired_at(now));
    }
}
