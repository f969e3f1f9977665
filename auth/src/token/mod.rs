pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::SessionClaims;
pub use claims::TokenIdentity;
pub use errors::TokenError;
pub use issuer::TokenConfig;
pub use issuer::TokenIssuer;
pub use issuer::SESSION_TTL_DAYS;
