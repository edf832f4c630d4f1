//! Authentication utilities library
//!
//! Provides the credential core of the analytics API:
//! - Password hashing (SHA-256 pre-hash, then Argon2id)
//! - JWT bearer token issuance and fail-closed verification
//! - Authentication coordination
//!
//! Services define their own ports and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, JwtSettings};
//!
//! let handler = JwtHandler::new(&JwtSettings::with_secret("secret_key_at_least_32_bytes_long!")).unwrap();
//! let token = handler.issue("alice").unwrap();
//! assert_eq!(handler.verify(&token).unwrap(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, HashingSettings, JwtSettings};
//!
//! let auth = Authenticator::new(
//!     &JwtSettings::with_secret("secret_key_at_least_32_bytes_long!"),
//!     &HashingSettings::default(),
//! )
//! .unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::JwtSettings;
pub use password::HashingSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
