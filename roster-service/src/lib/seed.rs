//! Demo roster seeded at startup.
//!
//! Mirrors the two well-known accounts the service has always shipped with
//! for manual testing: "Алексей" and "Мария", both with password
//! `password123`. Controlled by the `seed.demo_users` config flag.

use chrono::Utc;
use credentials::PasswordHasher;

use crate::auth::errors::AuthError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub const DEMO_PASSWORD: &str = "password123";

/// Create the demo users.
///
/// Both accounts share one digest: hashing is the expensive step and the
/// demo password is the same. Алексей starts online, Мария offline.
pub async fn seed_demo_users<R: UserRepository>(users: &R) -> Result<(), AuthError> {
    let password_hash = PasswordHasher::new()
        .hash(DEMO_PASSWORD)
        .map_err(|e| AuthError::Hashing(e.to_string()))?;

    let demo_accounts = [
        ("Алексей", "alexey@example.com", true),
        ("Мария", "maria@example.com", false),
    ];

    for (username, email, is_online) in demo_accounts {
        let user = User {
            id: UserId::new(),
            username: Username::new(username.to_string()).map_err(UserError::from)?,
            email: EmailAddress::new(email.to_string()).map_err(UserError::from)?,
            password_hash: password_hash.clone(),
            is_online,
            created_at: Utc::now(),
        };

        let user = users.create(user).await?;
        tracing::info!(username = %user.username, "Seeded demo user");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn test_seed_creates_both_demo_users() {
        let repo = InMemoryUserRepository::new();
        seed_demo_users(&repo).await.unwrap();

        let roster = repo.list_all().await.unwrap();
        assert_eq!(roster.len(), 2);

        let alexey = repo.find_by_username("Алексей").await.unwrap().unwrap();
        assert!(alexey.is_online);
        let maria = repo.find_by_username("Мария").await.unwrap().unwrap();
        assert!(!maria.is_online);
    }

    #[tokio::test]
    async fn test_seeded_digest_verifies_demo_password() {
        let repo = InMemoryUserRepository::new();
        seed_demo_users(&repo).await.unwrap();

        let alexey = repo.find_by_username("Алексей").await.unwrap().unwrap();
        let hasher = PasswordHasher::new();
        assert!(hasher
            .verify(DEMO_PASSWORD, &alexey.password_hash)
            .unwrap());
        assert!(!hasher.verify("wrong", &alexey.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_seed_twice_fails_on_duplicates() {
        let repo = InMemoryUserRepository::new();
        seed_demo_users(&repo).await.unwrap();

        let result = seed_demo_users(&repo).await;
        assert!(result.is_err());
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }
}
