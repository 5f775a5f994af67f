use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::CredentialRepository;
use crate::inbound::http::router::AppState;
use crate::user::errors::CredentialError;
use crate::user::errors::EmailError;

pub async fn login<R: CredentialRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let token = state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: token.into_string(),
        },
    ))
}

/// HTTP request body for login (raw JSON).
///
/// No `Debug`: the plaintext password must never end up in a log line.
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseLoginRequestError {
    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ParseLoginRequestError> {
        let email = EmailAddress::new(&self.email)?;
        let command = LoginCommand::new(email, self.password)?;
        Ok(command)
    }
}

impl From<ParseLoginRequestError> for ApiError {
    fn from(err: ParseLoginRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
