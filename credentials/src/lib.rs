//! Authentication primitives library
//!
//! Provides the two secrets-handling building blocks the roster service is
//! built on:
//! - Password hashing (Argon2id, self-describing PHC digests)
//! - Opaque session token generation
//!
//! The library knows nothing about users, stores, or HTTP. Services own the
//! orchestration (who may log in, how long sessions live); this crate only
//! guarantees that digests are salted and one-way and that tokens are
//! unguessable.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("password123").unwrap();
//! assert!(hasher.verify("password123", &digest).unwrap());
//! assert!(!hasher.verify("password124", &digest).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use credentials::SessionToken;
//!
//! let token = SessionToken::generate();
//! let echoed = SessionToken::from_string(token.as_str().to_string());
//! assert_eq!(token, echoed);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionToken;
