mod common;

use auth::TokenCodec;
use chrono::Duration;
use common::TestApp;
use common::TEST_JWT_SECRET;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    // Nothing secret comes back
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_normalizes_email_and_keeps_display_name() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "  Nicola@Example.COM ",
            "password": "pass_word!",
            "name": "Nicola"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["name"], "Nicola");
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "nicola@example.com", "password": "" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_malformed_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "not-an-email", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_login_introspect_round_trip() {
    let app = TestApp::spawn().await;

    // Register
    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "a@b.com", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let subject_id = body["data"]["id"].as_str().unwrap().to_string();

    // Login with the same credentials
    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "a@b.com", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    // Introspect the token
    let response = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject_id"], subject_id.as_str());

    // A case variant of the same email is the same identity
    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "A@b.com", "password": "x" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts_regardless_of_password() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/signup")
        .json(&json!({ "email": "nicola@example.com", "password": "different_password" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_login_failures_do_not_reveal_whether_the_email_exists() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({ "email": "ghost@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: serde_json::Value =
        unknown_email.json().await.expect("Failed to parse response");

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nicola@example.com", "password": "wrong_password" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: serde_json::Value = wrong_password
        .json()
        .await
        .expect("Failed to parse response");

    // Byte-identical bodies: no oracle for account existence
    assert_eq!(unknown_email, wrong_password);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nicola@example.com", "password": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_guard_rejections_are_uniform() {
    let app = TestApp::spawn().await;

    // (a) No Authorization header
    let missing = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    // (b) Header without the Bearer prefix
    let not_bearer = app
        .get("/api/auth/me")
        .header("Authorization", "Token abc123")
        .send()
        .await
        .expect("Failed to execute request");

    // (c) Syntactically valid token signed with the wrong secret
    let forged_codec = TokenCodec::new(b"another-secret-that-is-at-least-32-bytes!")
        .expect("forged secret is long enough");
    let forged = forged_codec
        .issue(&Uuid::new_v4().to_string(), Duration::hours(1))
        .expect("Failed to issue forged token");
    let wrong_signature = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", forged))
        .send()
        .await
        .expect("Failed to execute request");

    // (d) Expired token signed with the right secret
    let expired_codec = TokenCodec::new(TEST_JWT_SECRET).expect("test secret is long enough");
    let expired = expired_codec
        .issue(&Uuid::new_v4().to_string(), Duration::seconds(-60))
        .expect("Failed to issue expired token");
    let expired = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", expired))
        .send()
        .await
        .expect("Failed to execute request");

    let mut bodies = Vec::new();
    for response in [missing, not_bearer, wrong_signature, expired] {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        bodies.push(body);
    }

    // All four causes answer with the same body
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_expired_token_is_rejected_even_straight_after_login() {
    let app = TestApp::spawn_with_ttl(Duration::seconds(-60)).await;

    app.post("/api/auth/signup")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .get("/api/auth/me")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forgot_password_answers_identically_for_any_address() {
    let app = TestApp::spawn().await;

    app.post("/api/auth/signup")
        .json(&json!({ "email": "nicola@example.com", "password": "pass_word!" }))
        .send()
        .await
        .expect("Failed to execute request");

    let registered = app
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": "nicola@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(registered.status(), StatusCode::OK);
    let registered: serde_json::Value = registered.json().await.expect("Failed to parse response");

    let unregistered = app
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": "ghost@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unregistered.status(), StatusCode::OK);
    let unregistered: serde_json::Value = unregistered
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(registered, unregistered);
}

#[tokio::test]
async fn test_banner_route() {
    let app = TestApp::spawn().await;

    let response = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}
