use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory user store.
///
/// Process-lifetime only; contents reset on restart. A single `RwLock`
/// guards the whole map: `create` holds the write lock across its
/// uniqueness checks and the insert, which is what makes two concurrent
/// creates with the same email (or username) unable to both succeed.
/// Records are fully constructed before they are published into the map,
/// so readers never observe a partial user. No method awaits while
/// holding the lock.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<UserId, User>>, UserError> {
        self.users
            .read()
            .map_err(|_| UserError::StoreFailure("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<UserId, User>>, UserError> {
        self.users
            .write()
            .map_err(|_| UserError::StoreFailure("user store lock poisoned".to_string()))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.write()?;

        if users.values().any(|existing| existing.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        if users
            .values()
            .any(|existing| existing.username == user.username)
        {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .read()?
            .values()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .read()?
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut all: Vec<User> = self.read()?.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(all)
    }

    async fn set_online(&self, id: &UserId, online: bool) -> Result<(), UserError> {
        if let Some(user) = self.write()?.get_mut(id) {
            user.is_online = online;
        }
        Ok(())
    }
}
