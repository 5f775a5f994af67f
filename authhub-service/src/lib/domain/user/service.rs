use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialRepository;

/// Authentication orchestrator.
///
/// Coordinates the credential store, the password hasher, and the token
/// codec. Holds no mutable state; every operation is request-scoped.
pub struct AuthService<R>
where
    R: CredentialRepository,
{
    repository: Arc<R>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
}

impl<R> AuthService<R>
where
    R: CredentialRepository,
{
    /// Create the service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - credential persistence implementation
    /// * `token_codec` - codec built from the process-wide signing secret
    /// * `token_ttl` - validity window for issued tokens
    pub fn new(repository: Arc<R>, token_codec: TokenCodec, token_ttl: Duration) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_codec,
            token_ttl,
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::Conflict);
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            display_name: command.display_name,
            password_hash,
            created_at: Utc::now(),
        };

        // The existence check above is not atomic with the insert; a
        // concurrent registration for the same email is resolved by the
        // store's uniqueness constraint and surfaces here as Conflict.
        let created = self.repository.insert(user).await?;

        tracing::info!(user_id = %created.id, "user registered");
        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        // An unknown email takes the same exit as a wrong password.
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(&command.password, &user.password_hash)
            .map_err(|e| AuthError::Internal(format!("password verification failed: {e}")))?;

        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .token_codec
            .issue(&user.id.to_string(), self.token_ttl)
            .map_err(|e| AuthError::Internal(format!("token issuance failed: {e}")))?;

        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(AccessToken::new(token))
    }

    async fn who_am_i(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self
            .token_codec
            .verify(token)
            .map_err(|_| AuthError::Unauthorized)?;

        UserId::from_string(&claims.sub).map_err(|_| AuthError::Unauthorized)
    }
}
