use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// HS256 security margin: the secret must cover the HMAC-SHA-256 output size.
const MIN_SECRET_BYTES: usize = 32;

/// Signs and verifies compact, tamper-evident bearer tokens (HS256 JWT).
///
/// Built once at startup from the process-wide signing secret and never
/// reconfigured afterwards.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the shared signing secret.
    ///
    /// # Errors
    /// * `SecretTooShort` - the secret is under 32 bytes
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(TokenError::SecretTooShort {
                minimum: MIN_SECRET_BYTES,
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Issue a signed token for `subject`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `SigningFailed` - token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(subject, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Every failure cause collapses into the single
    /// [`TokenError::InvalidToken`] kind: a caller cannot tell a bad
    /// signature from a malformed token from an expired one. Expiry is
    /// checked with zero leeway, so a token past `exp` by any margin fails.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidToken)
    }
}
