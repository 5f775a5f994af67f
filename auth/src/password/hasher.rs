use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Salted one-way password hashing.
///
/// Wraps Argon2id with the library's recommended cost parameters, fixed at
/// construction. Every call to [`hash`](Self::hash) draws a fresh random
/// salt, so hashing the same plaintext twice yields two different digests.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string digest carrying the algorithm, its parameters, the salt,
    /// and the hash itself.
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Recomputes with the salt embedded in the digest and compares in
    /// constant time. A mismatch is `Ok(false)`, never an error; `Err` is
    /// reserved for digests that cannot be parsed at all.
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(digest).map_err(|e| PasswordError::InvalidDigest(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
