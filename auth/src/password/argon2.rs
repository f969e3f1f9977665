use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way digest operations for stored credentials.
///
/// Every digest carries its own random salt, so two digests of the same
/// plaintext differ; only [`PasswordHasher::verify`] can relate a plaintext
/// back to a digest. Argon2id with the crate's default cost parameters keeps
/// the work factor adaptive.
pub struct PasswordHasher {
    algorithm: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            algorithm: Argon2::default(),
        }
    }

    /// Digest a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string carrying algorithm, parameters, salt, and hash, so
    /// verification needs no side-channel configuration
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation itself failed
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.algorithm
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// A mismatch is a normal `Ok(false)`, never an error; the comparison is
    /// constant-time inside the argon2 crate.
    ///
    /// # Errors
    /// * `InvalidDigest` - the stored digest could not be parsed
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(digest).map_err(|e| PasswordError::InvalidDigest(e.to_string()))?;

        Ok(self
            .algorithm
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
