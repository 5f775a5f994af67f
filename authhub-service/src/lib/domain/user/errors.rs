use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is required")]
    Missing,

    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for credential validation at the service boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("password is required")]
    MissingPassword,
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Registration hit an identity that already exists. Carries no detail:
    /// the stored email never travels back inside an error.
    #[error("user already exists")]
    Conflict,

    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, wrongly signed, and expired tokens are
    /// deliberately indistinguishable.
    #[error("invalid or expired token")]
    Unauthorized,

    /// The external credential store failed; surfaced to clients as an
    /// opaque server error.
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}
