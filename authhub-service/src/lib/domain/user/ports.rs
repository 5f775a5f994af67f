use async_trait::async_trait;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;

/// Port for the authentication service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity from validated credentials.
    ///
    /// # Returns
    /// The created user record. Callers must not echo the password hash.
    ///
    /// # Errors
    /// * `Conflict` - the normalized email is already registered
    /// * `StoreUnavailable` - the credential store failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email or wrong password, identically
    /// * `StoreUnavailable` - the credential store failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Introspect a bearer token and return the authenticated subject.
    ///
    /// Pure verification: no store access and no side effects, so clients
    /// may poll it freely to decide whether a cached token is still valid.
    ///
    /// # Errors
    /// * `Unauthorized` - the token is invalid or expired
    async fn who_am_i(&self, token: &str) -> Result<UserId, AuthError>;
}

/// Persistence port for registered identities.
///
/// The store is the single point of truth for email uniqueness: `insert`
/// must be an atomic insert-if-absent, because multiple service instances
/// may race on the same email and no in-process lock can arbitrate that.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Look up a user by normalized email.
    ///
    /// # Returns
    /// `None` when no such user exists.
    ///
    /// # Errors
    /// * `StoreUnavailable` - the store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;

    /// Persist a new user.
    ///
    /// # Errors
    /// * `Conflict` - the normalized email is already taken
    /// * `StoreUnavailable` - the store operation failed
    async fn insert(&self, user: User) -> Result<User, AuthError>;
}
