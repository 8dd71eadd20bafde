use async_trait::async_trait;
use chrono::Duration;
use credentials::SessionToken;

use crate::domain::session::models::Session;
use crate::domain::user::models::UserId;
use crate::session::errors::SessionError;

/// Persistence operations for sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Open a new session for a user.
    ///
    /// Generates a fresh unguessable token and sets
    /// `expires_at = now + ttl`. The returned token is the caller's only
    /// handle on the session.
    ///
    /// # Errors
    /// * `StoreFailure` - Store operation failed
    async fn create(&self, user_id: UserId, ttl: Duration) -> Result<Session, SessionError>;

    /// Look up a live session by token.
    ///
    /// Returns `None` both for unknown tokens and for sessions past their
    /// expiry; an expired record is evicted as a side effect of the read.
    /// Callers cannot distinguish the two cases.
    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionError>;

    /// Destroy a session.
    ///
    /// Idempotent: destroying an unknown or already-destroyed token
    /// succeeds silently.
    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionError>;
}
