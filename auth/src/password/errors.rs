use thiserror::Error;

/// Error type for password digest operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored digest is not a valid PHC string: {0}")]
    InvalidDigest(String),
}
