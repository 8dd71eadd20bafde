use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Persistence operations for the user aggregate.
///
/// Lookups take raw `&str` keys rather than validated value objects: login
/// must be able to probe for a username that would fail registration rules
/// and get a plain "not found" instead of a validation error.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of both username and email is checked atomically with the
    /// insert: two concurrent creates with the same email (or username)
    /// cannot both succeed.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StoreFailure` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by exact username (case-sensitive).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// Retrieve a user by exact email (case-sensitive).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users, ordered by creation time.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Set a user's online flag.
    ///
    /// A no-op when the id is absent; callers holding a stale id are not an
    /// error condition.
    async fn set_online(&self, id: &UserId, online: bool) -> Result<(), UserError>;
}
