//! Authentication infrastructure library
//!
//! Cryptographic building blocks for credential management:
//! - Password digests (Argon2id)
//! - Session token issuance and validation (HS256 JWT)
//!
//! Services keep their own domain traits and orchestration; this crate only
//! owns the pieces that must stay interoperable across processes sharing a
//! signing key.
//!
//! # Examples
//!
//! ## Password digests
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("correct horse battery staple").unwrap();
//! assert!(hasher.verify("correct horse battery staple", &digest).unwrap());
//! assert!(!hasher.verify("tr0ub4dor&3", &digest).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::{TokenConfig, TokenIdentity, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(TokenConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     issuer: "account-service".to_string(),
//!     audience: "content-api".to_string(),
//! })
//! .unwrap();
//!
//! let identity = TokenIdentity::new("user-123")
//!     .with_username("alice")
//!     .with_email("alice@example.com");
//!
//! let token = issuer.issue(&identity).unwrap();
//! let claims = issuer.validate(&token).unwrap();
//! assert_eq!(claims.sub, "user-123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionClaims;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenIdentity;
pub use token::TokenIssuer;
pub use token::SESSION_TTL_DAYS;
