use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::SessionClaims;
use super::claims::TokenIdentity;
use super::claims::UNKNOWN_CLAIM;
use super::errors::TokenError;

/// Days a session token stays valid after issuance.
pub const SESSION_TTL_DAYS: i64 = 5;

/// Signing configuration shared between the issuer and any verifier.
///
/// A verifier in another process must apply the identical secret, issuer,
/// and audience to accept tokens produced here.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

/// Issues and validates session tokens.
///
/// Tokens are compact HS256 JWTs carrying [`SessionClaims`]. Validation
/// checks signature, expiry, issuer, and audience.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
}

impl TokenIssuer {
    /// Create an issuer from signing configuration.
    ///
    /// # Errors
    /// * `MissingSecret` - the signing key is absent or empty; callers are
    ///   expected to propagate this and abort startup
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(config: TokenConfig) -> Result<Self, TokenError> {
        if config.secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer,
            audience: config.audience,
        })
    }

    /// Issue a session token for a verified identity.
    ///
    /// The token expires a fixed [`SESSION_TTL_DAYS`] days after issuance.
    /// Missing display name or email claims fall back to a literal rather
    /// than being omitted.
    ///
    /// # Errors
    /// * `EncodingFailed` - token serialization or signing failed
    pub fn issue(&self, identity: &TokenIdentity) -> Result<String, TokenError> {
        let now = Utc::now();

        let claims = SessionClaims {
            sub: identity.subject.clone(),
            name: identity
                .username
                .clone()
                .unwrap_or_else(|| UNKNOWN_CLAIM.to_string()),
            email: identity
                .email
                .clone()
                .unwrap_or_else(|| UNKNOWN_CLAIM.to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::days(SESSION_TTL_DAYS)).timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token's signature, expiry, issuer, and audience.
    ///
    /// # Errors
    /// * `TokenExpired` - the embedded expiry has passed
    /// * `DecodingFailed` - bad signature, wrong issuer/audience, or
    ///   malformed token
    pub fn validate(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::DecodingFailed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TokenConfig {
        TokenConfig {
            secret: "test_secret_key_at_least_32_bytes!".to_string(),
            issuer: "account-service".to_string(),
            audience: "content-api".to_string(),
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let issuer = TokenIssuer::new(test_config()).expect("Failed to build issuer");

        let identity = TokenIdentity::new("user-1")
            .with_username("alice")
            .with_email("alice@example.com");

        let token = issuer.issue(&identity).expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = issuer.validate(&token).expect("Failed to validate token");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.iss, "account-service");
        assert_eq!(claims.aud, "content-api");
    }

    #[test]
    fn test_validity_window_is_five_days() {
        let issuer = TokenIssuer::new(test_config()).unwrap();

        let token = issuer.issue(&TokenIdentity::new("user-1")).unwrap();
        let claims = issuer.validate(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, SESSION_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_missing_name_and_email_fall_back() {
        let issuer = TokenIssuer::new(test_config()).unwrap();

        let token = issuer.issue(&TokenIdentity::new("user-1")).unwrap();
        let claims = issuer.validate(&token).unwrap();

        assert_eq!(claims.name, UNKNOWN_CLAIM);
        assert_eq!(claims.email, UNKNOWN_CLAIM);
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let result = TokenIssuer::new(TokenConfig {
            secret: "   ".to_string(),
            issuer: "account-service".to_string(),
            audience: "content-api".to_string(),
        });

        assert!(matches!(result, Err(TokenError::MissingSecret)));
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let issuer = TokenIssuer::new(test_config()).unwrap();
        let other = TokenIssuer::new(TokenConfig {
            secret: "another_secret_key_32_bytes_long!!".to_string(),
            ..test_config()
        })
        .unwrap();

        let token = issuer.issue(&TokenIdentity::new("user-1")).unwrap();

        assert!(matches!(
            other.validate(&token),
            Err(TokenError::DecodingFailed(_))
        ));
    }

    #[test]
    fn test_validate_with_wrong_audience() {
        let issuer = TokenIssuer::new(test_config()).unwrap();
        let other = TokenIssuer::new(TokenConfig {
            audience: "admin-api".to_string(),
            ..test_config()
        })
        .unwrap();

        let token = issuer.issue(&TokenIdentity::new("user-1")).unwrap();

        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn test_validate_malformed_token() {
        let issuer = TokenIssuer::new(test_config()).unwrap();

        assert!(issuer.validate("not.a.token").is_err());
    }
}
