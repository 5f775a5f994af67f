use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Token introspection for clients deciding whether a cached token is still
/// valid. The guard middleware has already verified the bearer token; this
/// handler only echoes the authenticated subject.
pub async fn who_am_i(
    Extension(identity): Extension<AuthenticatedUser>,
) -> ApiSuccess<WhoAmIResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        WhoAmIResponseData {
            subject_id: identity.user_id.to_string(),
        },
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct WhoAmIResponseData {
    pub subject_id: String,
}
