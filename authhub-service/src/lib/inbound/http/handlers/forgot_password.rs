use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;

/// Password-reset entry point.
///
/// Delivery is not implemented; the endpoint only acknowledges the request.
/// The response is identical whether or not the address is registered, so it
/// cannot be used to probe for accounts.
pub async fn forgot_password(
    Json(body): Json<ForgotPasswordRequest>,
) -> Result<ApiSuccess<ForgotPasswordResponseData>, ApiError> {
    let _ = EmailAddress::new(&body.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ForgotPasswordResponseData {
            message: "If an account exists for that address, a reset link will be sent"
                .to_string(),
        },
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordResponseData {
    pub message: String,
}
