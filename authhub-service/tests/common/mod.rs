use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenCodec;
use authhub_service::domain::user::models::EmailAddress;
use authhub_service::domain::user::models::User;
use authhub_service::domain::user::ports::CredentialRepository;
use authhub_service::domain::user::service::AuthService;
use authhub_service::inbound::http::router::create_router;
use authhub_service::user::errors::AuthError;
use chrono::Duration;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory credential store standing in for Postgres.
///
/// Keyed by normalized email; insert-if-absent under a single lock mirrors
/// the database's unique index.
pub struct InMemoryCredentialRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("user map poisoned");
        Ok(users.get(email.as_str()).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.lock().expect("user map poisoned");
        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::Conflict);
        }

        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(user)
    }
}

/// Test application running the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(Duration::hours(24)).await
    }

    /// Spawn with a custom token TTL. A negative TTL makes login mint
    /// already-expired tokens, which is how expiry is exercised without
    /// sleeping through a real validity window.
    pub async fn spawn_with_ttl(token_ttl: Duration) -> Self {
        let repository = Arc::new(InMemoryCredentialRepository::new());
        let token_codec = TokenCodec::new(TEST_JWT_SECRET).expect("test secret is long enough");
        let auth_service = Arc::new(AuthService::new(repository, token_codec, token_ttl));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(auth_service);
        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}
