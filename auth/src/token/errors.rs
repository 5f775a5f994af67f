use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("signing secret must be at least {minimum} bytes")]
    SecretTooShort { minimum: usize },

    #[error("failed to sign token: {0}")]
    SigningFailed(String),

    /// Deliberately cause-free: a bad signature, a malformed token, and an
    /// expired one all surface identically.
    #[error("invalid token")]
    InvalidToken,
}
