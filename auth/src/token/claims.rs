use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried by an issued token.
///
/// Deliberately minimal: the subject identifier plus the validity window.
/// Everything a verifier needs travels inside the token; no server-side
/// lookup is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `subject` expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
