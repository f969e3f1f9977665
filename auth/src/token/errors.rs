use thiserror::Error;

/// Error type for session token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// The signing key is absent or empty. Nothing can be issued or
    /// validated without one, so this fails construction outright.
    #[error("Signing key is missing or empty")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,
}
