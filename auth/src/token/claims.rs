use serde::Deserialize;
use serde::Serialize;

/// Literal placed in the `name` and `email` claims when the identity has no
/// value for them, so verifiers can rely on both fields being present.
pub const UNKNOWN_CLAIM: &str = "unknown";

/// Identity facts a session token asserts about its bearer.
///
/// Built from a verified account by the service issuing the token; the
/// subject is mandatory, display name and email are optional.
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub(crate) subject: String,
    pub(crate) username: Option<String>,
    pub(crate) email: Option<String>,
}

impl TokenIdentity {
    pub fn new(subject: impl ToString) -> Self {
        Self {
            subject: subject.to_string(),
            username: None,
            email: None,
        }
    }

    pub fn with_username(mut self, username: impl ToString) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn with_email(mut self, email: impl ToString) -> Self {
        self.email = Some(email.to_string());
        self
    }
}

/// Claim set embedded in every session token.
///
/// Standard RFC 7519 registered claims plus the bearer's display name and
/// email. The shape is fixed rather than generic: the token is the one
/// externally visible artifact, and every verifier must agree on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Subject (account identifier)
    pub sub: String,

    /// Display name, or [`UNKNOWN_CLAIM`]
    pub name: String,

    /// Email address, or [`UNKNOWN_CLAIM`]
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}
