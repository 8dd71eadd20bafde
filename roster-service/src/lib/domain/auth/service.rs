use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use credentials::PasswordHasher;
use credentials::SessionToken;

use crate::auth::errors::AuthError;
use crate::domain::auth::models::AuthStatus;
use crate::domain::auth::models::AuthenticatedSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for authentication operations.
///
/// Orchestrates the user store, the session store, and the password hasher.
/// The two stores are never written as one atomic unit; the order is always
/// user first, session second, and a gap between the two is recoverable by
/// logging in again.
pub struct AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    users: Arc<UR>,
    sessions: Arc<SR>,
    password_hasher: PasswordHasher,
    session_ttl: Duration,
}

impl<UR, SR> AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    /// Create a new auth service with injected stores.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `sessions` - Session persistence implementation
    /// * `session_ttl` - Lifetime applied to every session opened here
    pub fn new(users: Arc<UR>, sessions: Arc<SR>, session_ttl: Duration) -> Self {
        Self {
            users,
            sessions,
            password_hasher: PasswordHasher::new(),
            session_ttl,
        }
    }
}

#[async_trait]
impl<UR, SR> AuthServicePort for AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticatedSession, AuthError> {
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed during registration");
                AuthError::Hashing(e.to_string())
            })?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            is_online: true,
            created_at: Utc::now(),
        };

        let user = self.users.create(user).await?;
        let session = self.sessions.create(user.id, self.session_ttl).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthenticatedSession {
            user,
            token: session.token,
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AuthError> {
        // Unknown username and wrong password must fall through to the same
        // error; only the shape of the failure below differs internally.
        let mut user = self
            .users
            .find_by_username(command.username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(&command.password, &user.password_hash)
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification failed");
                AuthError::Hashing(e.to_string())
            })?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.users.set_online(&user.id, true).await?;
        user.is_online = true;

        let session = self.sessions.create(user.id, self.session_ttl).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(AuthenticatedSession {
            user,
            token: session.token,
        })
    }

    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        // An absent or already-expired session makes logout a no-op; a
        // client logging out twice is not an error condition.
        if let Some(session) = self.sessions.get(token).await? {
            self.users.set_online(&session.user_id, false).await?;
            self.sessions.destroy(token).await?;
            tracing::info!(user_id = %session.user_id, "User logged out");
        }

        Ok(())
    }

    async fn check_auth(&self, token: &SessionToken) -> Result<AuthStatus, AuthError> {
        let Some(session) = self.sessions.get(token).await? else {
            return Ok(AuthStatus::Anonymous);
        };

        match self.users.find_by_id(&session.user_id).await? {
            Some(user) => Ok(AuthStatus::Authenticated(user)),
            None => {
                // Session outlived its user; heal the store and fail closed.
                tracing::warn!(user_id = %session.user_id, "Destroying orphaned session");
                self.sessions.destroy(token).await?;
                Ok(AuthStatus::Anonymous)
            }
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list_all().await?)
    }
}
