//! Authentication building blocks for the profile service
//!
//! Provides the two security primitives the HTTP layer composes:
//! - Password hashing (Argon2id, PHC string format)
//! - Signed bearer token issuance and verification (JWT, HS256)
//!
//! Tokens are stateless: possession of a valid, unexpired token is
//! sufficient for authorization. There is no server-side session store and
//! no revocation list; expiry is the only boundary. This is a documented
//! property of the scheme, not an oversight.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use chrono::Duration;
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(100));
//! let token = issuer.issue("user123").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
