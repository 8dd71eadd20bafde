use async_trait::async_trait;
use credentials::SessionToken;

use crate::auth::errors::AuthError;
use crate::domain::auth::models::AuthStatus;
use crate::domain::auth::models::AuthenticatedSession;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::User;

/// Port for authentication and session lifecycle operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and open their first session.
    ///
    /// # Errors
    /// * `User(EmailAlreadyExists)` - Email is already registered
    /// * `User(UsernameAlreadyExists)` - Username is already taken
    /// * `Hashing` - Password could not be hashed
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticatedSession, AuthError>;

    /// Verify credentials and open a new session.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username OR wrong password; callers
    ///   must not be able to tell which
    async fn login(&self, command: LoginCommand) -> Result<AuthenticatedSession, AuthError>;

    /// Close the session behind a token and mark its owner offline.
    ///
    /// Idempotent: an unknown or already-expired token still succeeds.
    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError>;

    /// Resolve a token to its user.
    ///
    /// `Anonymous` is a normal outcome, never an error. A session whose
    /// user no longer exists is destroyed on sight and reported anonymous.
    async fn check_auth(&self, token: &SessionToken) -> Result<AuthStatus, AuthError>;

    /// All users ordered by creation time, for the roster listing.
    async fn list_users(&self) -> Result<Vec<User>, AuthError>;
}
