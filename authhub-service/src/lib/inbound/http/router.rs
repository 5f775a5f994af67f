use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::forgot_password::forgot_password;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::who_am_i::who_am_i;
use super::middleware::require_bearer;
use crate::domain::user::ports::CredentialRepository;
use crate::domain::user::service::AuthService;

/// Shared request state.
///
/// Generic over the repository so tests can run the real router against an
/// in-memory store.
pub struct AppState<R: CredentialRepository> {
    pub auth_service: Arc<AuthService<R>>,
}

impl<R: CredentialRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

pub fn create_router<R: CredentialRepository>(auth_service: Arc<AuthService<R>>) -> Router {
    let state = AppState { auth_service };

    let public_routes = Router::new()
        .route("/", get(banner))
        .route("/api/auth/signup", post(signup::<R>))
        .route("/api/auth/login", post(login::<R>))
        .route("/api/auth/forgot-password", post(forgot_password));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(who_am_i))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn banner() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "message": "AuthHub backend running" })),
    )
}
