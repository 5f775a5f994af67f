use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::CredentialRepository;
use crate::inbound::http::router::AppState;
use crate::user::errors::CredentialError;
use crate::user::errors::EmailError;

pub async fn signup<R: CredentialRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON).
///
/// No `Debug`: the plaintext password must never end up in a log line.
#[derive(Clone, Deserialize)]
pub struct SignupRequest {
    email: String,
    password: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl SignupRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseSignupRequestError> {
        let email = EmailAddress::new(&self.email)?;
        let command = RegisterCommand::new(email, self.password, self.name)?;
        Ok(command)
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupResponseData {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            name: user.display_name.clone(),
            created_at: user.created_at,
        }
    }
}
