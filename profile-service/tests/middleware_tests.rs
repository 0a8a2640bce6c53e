mod common;

use auth::TokenIssuer;
use chrono::Duration;
use common::TestApp;
use common::AUTH_HEADER;
use reqwest::StatusCode;

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["msg"], "No token, authorisation denied");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth")
        .header(AUTH_HEADER, "not-a-jwt")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["msg"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::spawn().await;
    let (user_id, _) = app.seed_user("nicola", "nicola@example.com").await;

    let expired_issuer = TokenIssuer::new(common::TEST_SECRET, Duration::seconds(-10));
    let token = expired_issuer
        .issue(&user_id.to_string())
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/api/auth", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["msg"], "Invalid token");
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_is_rejected() {
    let app = TestApp::spawn().await;
    let (user_id, _) = app.seed_user("nicola", "nicola@example.com").await;

    let foreign_issuer = TokenIssuer::new(
        b"a-completely-different-secret-of-sufficient-length",
        Duration::hours(24),
    );
    let token = foreign_issuer
        .issue(&user_id.to_string())
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/api/auth", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["msg"], "Invalid token");
}

#[tokio::test]
async fn test_valid_token_reaches_handler_with_identity() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.seed_user("nicola", "nicola@example.com").await;

    let response = app
        .get_authenticated("/api/auth", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["name"], "nicola");
    assert_eq!(body["email"], "nicola@example.com");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_concurrent_tokens_resolve_to_their_own_identity() {
    let app = TestApp::spawn().await;

    let mut seeded = Vec::new();
    for i in 0..100 {
        let email = format!("user{}@example.com", i);
        let name = format!("user{}", i);
        seeded.push(app.seed_user(&name, &email).await);
    }

    let mut handles = Vec::new();
    for (user_id, token) in seeded {
        let request = app.get_authenticated("/api/auth", &token);
        handles.push(tokio::spawn(async move {
            let response = request.send().await.expect("Failed to execute request");
            assert_eq!(response.status(), StatusCode::OK);
            let body: serde_json::Value =
                response.json().await.expect("Failed to parse response");
            assert_eq!(body["id"], user_id.to_string());
        }));
    }

    for handle in handles {
        handle.await.expect("Request task panicked");
    }
}
