use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Storage-level failures surfaced by the account repository.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The store's unique index rejected the write.
    #[error("Username or email already registered")]
    AlreadyExists,

    #[error("Database error: {0}")]
    Database(String),
}

/// Outcome set for the authentication operations.
///
/// Every operation resolves to one of these; only `Configuration` is
/// allowed to abort a call instead of being returned to the transport
/// layer as a soft failure.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("El identificador de inicio de sesión no puede estar vacío.")]
    EmptyIdentifier,

    /// Unknown identifier and wrong password share this variant so callers
    /// cannot tell which of the two occurred.
    #[error("Nombre de usuario/correo o contraseña incorrectos.")]
    InvalidCredentials,

    #[error("Usuario o email ya existen")]
    AlreadyRegistered,

    #[error("Signing configuration invalid: {0}")]
    Configuration(String),

    #[error("{0}")]
    Infrastructure(String),
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => AuthError::AlreadyRegistered,
            RepositoryError::Database(detail) => AuthError::Infrastructure(detail),
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        AuthError::Infrastructure(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MissingSecret => AuthError::Configuration(err.to_string()),
            other => AuthError::Infrastructure(format!("Token generation failed: {}", other)),
        }
    }
}
