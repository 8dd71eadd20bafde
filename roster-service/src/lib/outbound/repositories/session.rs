use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use credentials::SessionToken;

use crate::domain::session::models::Session;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::models::UserId;
use crate::session::errors::SessionError;

/// In-memory session store.
///
/// A `Mutex` rather than an `RwLock`: the lookup path evicts expired
/// records, so even `get` mutates. Expiry is enforced lazily at read time;
/// there is no background sweeper, and an expired-but-never-read session
/// simply occupies its map slot until touched. No method awaits while
/// holding the lock.
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<SessionToken, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionToken, Session>>, SessionError> {
        self.sessions
            .lock()
            .map_err(|_| SessionError::StoreFailure("session store lock poisoned".to_string()))
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, user_id: UserId, ttl: Duration) -> Result<Session, SessionError> {
        let mut sessions = self.lock()?;

        // Practically unreachable for v4 tokens; the loop keeps the
        // one-record-per-token invariant unconditional rather than
        // probabilistic.
        let mut token = SessionToken::generate();
        while sessions.contains_key(&token) {
            token = SessionToken::generate();
        }

        let now = Utc::now();
        let session = Session {
            token: token.clone(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        };

        sessions.insert(token, session.clone());
        Ok(session)
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionError> {
        let mut sessions = self.lock()?;

        match sessions.get(token) {
            Some(session) if session.is_expired_at(Utc::now()) => {
                sessions.remove(token);
                Ok(None)
            }
            Some(session) => Ok(Some(session.clone())),
            None => Ok(None),
        }
    }

    async fn destroy(&self, token: &SessionToken) -> Result<(), SessionError> {
        self.lock()?.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = InMemorySessionRepository::new();
        let user_id = UserId::new();

        let session = repo.create(user_id, Duration::hours(24)).await.unwrap();

        let found = repo.get(&session.token).await.unwrap().unwrap();
        assert_eq!(found.user_id, user_id);
        assert_eq!(found.token, session.token);
        assert!(found.expires_at > found.created_at);
    }

    #[tokio::test]
    async fn test_unknown_token_is_none() {
        let repo = InMemorySessionRepository::new();
        assert!(repo
            .get(&SessionToken::generate())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_on_first_read() {
        let repo = InMemorySessionRepository::new();
        let session = repo.create(UserId::new(), Duration::zero()).await.unwrap();

        assert!(repo.get(&session.token).await.unwrap().is_none());
        // and the record was evicted, not just hidden
        assert!(repo.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_expired_session_stays_gone() {
        let repo = InMemorySessionRepository::new();
        let session = repo
            .create(UserId::new(), Duration::seconds(-1))
            .await
            .unwrap();

        assert!(repo.get(&session.token).await.unwrap().is_none());
        assert!(repo.get(&session.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_destroy_is_idempotent() {
        let repo = InMemorySessionRepository::new();
        let session = repo.create(UserId::new(), Duration::hours(24)).await.unwrap();

        repo.destroy(&session.token).await.unwrap();
        assert!(repo.get(&session.token).await.unwrap().is_none());

        // second destroy, and destroying a never-issued token, succeed
        repo.destroy(&session.token).await.unwrap();
        repo.destroy(&SessionToken::generate()).await.unwrap();
    }

    #[tokio::test]
    async fn test_tokens_are_distinct() {
        let repo = InMemorySessionRepository::new();
        let user_id = UserId::new();

        let mut tokens = HashSet::new();
        for _ in 0..100 {
            let session = repo.create(user_id, Duration::hours(24)).await.unwrap();
            tokens.insert(session.token);
        }

        assert_eq!(tokens.len(), 100);
    }

    #[tokio::test]
    async fn test_destroyed_token_cannot_be_reused() {
        let repo = InMemorySessionRepository::new();
        let session = repo.create(UserId::new(), Duration::hours(24)).await.unwrap();

        repo.destroy(&session.token).await.unwrap();

        // a new session for the same user gets a fresh token, and the old
        // token stays dead
        let replacement = repo.create(session.user_id, Duration::hours(24)).await.unwrap();
        assert_ne!(replacement.token, session.token);
        assert!(repo.get(&session.token).await.unwrap().is_none());
    }
}
