use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::CredentialRepository;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Authenticated subject attached to request extensions by the guard.
///
/// Lives for the duration of the request only; never persisted.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// One message for every rejection cause: callers cannot distinguish a
/// missing header from a malformed one from a bad or expired token.
const UNAUTHORIZED_MESSAGE: &str = "invalid or missing authentication token";

/// Request gate for protected routes.
///
/// Verifies the bearer token and exposes the subject to downstream handlers.
/// Pure beyond the extension insert: no store access, nothing to retry, and
/// the protected handler never runs on rejection.
pub async fn require_bearer<R: CredentialRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let user_id = state.auth_service.who_am_i(token).await.map_err(|e| {
        tracing::warn!(error = %e, "bearer token rejected");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Requires the exact `Bearer <token>` shape. Anything else is rejected
/// before the token codec is ever consulted.
fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("missing authorization header");
            unauthorized()
        })?;

    let header = header.to_str().map_err(|_| {
        tracing::warn!("authorization header is not valid text");
        unauthorized()
    })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header is not a bearer token");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}
