//! Authentication and authorization core
//!
//! Verifies user credentials against a persisted user record, issues
//! compact signed tokens (`header.payload.signature`, HMAC-SHA-256 over
//! the first two segments), and answers authorization questions about
//! such tokens:
//! - Login with username or email plus password
//! - Per-user and per-role authorization decisions
//! - Password re-verification for sensitive operations
//!
//! The user store and password hasher are trait ports injected at
//! construction; the web tier, persistence schema, and configuration
//! loading live with the host. An Argon2id implementation of the password
//! port ships in [`password`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use auth_core::AuthService;
//! use auth_core::PasswordVerifier;
//! use auth_core::Role;
//! use auth_core::User;
//! use auth_core::UserStore;
//!
//! struct SingleUser(User);
//!
//! impl UserStore for SingleUser {
//!     fn find_by_id(&self, id: i64) -> Option<User> {
//!         (self.0.id == id).then(|| self.0.clone())
//!     }
//!
//!     fn find_by_username_or_email(&self, username: &str, email: &str) -> Option<User> {
//!         (self.0.username == username || self.0.email == email).then(|| self.0.clone())
//!     }
//! }
//!
//! struct PlaintextVerifier;
//!
//! impl PasswordVerifier for PlaintextVerifier {
//!     fn matches(&self, plaintext: &str, hash: &str) -> bool {
//!         plaintext == hash
//!     }
//! }
//!
//! let alice = User {
//!     id: 7,
//!     username: "alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     password_hash: "hunter2".to_string(),
//!     role: Role::User,
//! };
//! let service = AuthService::new(
//!     Arc::new(SingleUser(alice)),
//!     Arc::new(PlaintextVerifier),
//!     "this string is a fake secret key",
//! );
//!
//! let token = service.login("alice", "hunter2").unwrap();
//! assert!(service.authorize_user(&token, 7).unwrap());
//! assert!(service.authorize_role(&token, &[Role::Staff, Role::User]).unwrap());
//! assert_eq!(service.extract_username(&token), "alice");
//! ```

pub mod password;
pub mod ports;
pub mod service;
pub mod token;
pub mod user;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use ports::PasswordVerifier;
pub use ports::UserStore;
pub use service::AuthService;
pub use service::AuthenticationError;
pub use service::AuthorizationError;
pub use service::UNKNOWN_USERNAME;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use user::Role;
pub use user::User;
