use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::CredentialError;
use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;

/// A registered identity.
///
/// Created on successful registration and never mutated afterwards; there is
/// no profile-update flow in this service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub display_name: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalized email address.
///
/// Trimmed, lower-cased, and RFC 5322 validated. The normalized form is the
/// uniqueness key for identity, so `A@b.com` and `a@b.com` name the same
/// account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize and validate a raw email string.
    ///
    /// # Errors
    /// * `Missing` - the string is empty after trimming
    /// * `InvalidFormat` - the string does not conform to RFC 5322
    pub fn new(email: &str) -> Result<Self, EmailError> {
        let normalized = email.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::Missing);
        }

        email_address::EmailAddress::from_str(&normalized)
            .map(|_| Self(normalized))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get the normalized email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A signed bearer token as handed to the caller.
///
/// The token is the caller's capability; nothing about it is retained
/// server-side. `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Command to register a new identity.
///
/// Carries the transient plaintext password for the duration of the call;
/// the `Debug` impl redacts it so the credential can never reach a log line
/// verbatim.
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub display_name: Option<String>,
}

impl RegisterCommand {
    /// Construct a register command, enforcing the password presence policy.
    ///
    /// # Errors
    /// * `MissingPassword` - the password is empty
    pub fn new(
        email: EmailAddress,
        password: String,
        display_name: Option<String>,
    ) -> Result<Self, CredentialError> {
        if password.is_empty() {
            return Err(CredentialError::MissingPassword);
        }

        Ok(Self {
            email,
            password,
            display_name,
        })
    }
}

impl fmt::Debug for RegisterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Command to authenticate an existing identity.
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    /// # Errors
    /// * `MissingPassword` - the password is empty
    pub fn new(email: EmailAddress, password: String) -> Result<Self, CredentialError> {
        if password.is_empty() {
            return Err(CredentialError::MissingPassword);
        }

        Ok(Self { email, password })
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
