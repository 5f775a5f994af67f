use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("stored digest is not a valid PHC string: {0}")]
    InvalidDigest(String),

    #[error("password verification failed: {0}")]
    VerificationFailed(String),
}
