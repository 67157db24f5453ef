//! Integration tests for login, logout and the current-user endpoint.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};

use househub_auth::password::upgrade_plaintext_passwords;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = TestApp::new().await;
    let id = app.create_test_user("harry@hogwarts.edu", "owl", "Harry").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({"email": "HARRY@hogwarts.edu", "password": "owl"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({
            "ok": true,
            "user": {"id": id, "email": "harry@hogwarts.edu", "name": "Harry"}
        })
    );

    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));

    let token = response.session_token().unwrap();
    assert_eq!(app.state.sessions.resolve(&token).await, Some(id));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.create_test_user("a@x.com", "right", "A").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({"email": "a@x.com", "password": "wrong"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, serde_json::json!({"error": "Invalid credentials"}));
    assert!(response.set_cookie().is_none());
    assert_eq!(app.state.sessions.active_count().await, 0);
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({"email": "nobody@x.com", "password": "pw"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, serde_json::json!({"error": "Invalid credentials"}));
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    for body in [
        serde_json::json!({"email": "a@x.com"}),
        serde_json::json!({"password": "pw"}),
        serde_json::json!({"email": "", "password": "pw"}),
        serde_json::json!({}),
    ] {
        let response = app.request("POST", "/api/login", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            serde_json::json!({"error": "Email and password are required"})
        );
    }

    let empty = app.request_raw("POST", "/api/login", "", None).await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        empty.body,
        serde_json::json!({"error": "Email and password are required"})
    );
}

#[tokio::test]
async fn test_login_malformed_or_oversized_body() {
    let app = TestApp::new().await;

    let malformed = app.request_raw("POST", "/api/login", "{email:", None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let huge = format!(r#"{{"email":"a@x.com","password":"{}"}}"#, "x".repeat(4096));
    let oversized = app.request_raw("POST", "/api/login", &huge, None).await;
    assert_eq!(oversized.status, StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_login_stalled_body_times_out() {
    let app = TestApp::with_config(|config| config.server.body_timeout_seconds = 1).await;

    let stalled = futures::stream::pending::<Result<Bytes, std::io::Error>>();
    let req = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(stalled))
        .unwrap();

    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        serde_json::json!({"error": "Request body timed out"})
    );
}

#[tokio::test]
async fn test_logout_revokes_session_and_clears_cookie() {
    let app = TestApp::new().await;
    app.create_test_user("a@x.com", "pw", "A").await;
    let token = app.login("a@x.com", "pw").await;

    let response = app.request("POST", "/api/logout", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"ok": true}));

    let cookie = response.set_cookie().unwrap();
    assert!(cookie.starts_with("session=;"));
    assert!(cookie.contains("Max-Age=0"));

    let me = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_cookie_still_clears() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"ok": true}));
    assert!(response.set_cookie().unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_me_returns_sanitized_profile() {
    let app = TestApp::new().await;
    let id = app.create_test_user("a@x.com", "pw", "Ann").await;
    let token = app.login("a@x.com", "pw").await;

    let response = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["name"], "Ann");
    assert_eq!(response.body["house"], "Red");
    assert!(response.body.get("password").is_none());
}

#[tokio::test]
async fn test_me_without_session() {
    let app = TestApp::new().await;

    let none = app.request("GET", "/api/me", None, None).await;
    assert_eq!(none.status, StatusCode::UNAUTHORIZED);
    assert_eq!(none.body, serde_json::json!({"error": "Not authenticated"}));

    let bogus = app.request("GET", "/api/me", None, Some("not-a-token")).await;
    assert_eq!(bogus.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_for_missing_user() {
    let app = TestApp::new().await;
    let token = app.state.sessions.create(404).await.unwrap();

    let response = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, serde_json::json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_legacy_plaintext_user_can_login_after_upgrade() {
    let app = TestApp::with_users(serde_json::json!([
        {"id": 1, "name": "Old", "email": "old@x.com", "password": "legacy", "house": "Blue"}
    ]))
    .await;

    let before = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({"email": "old@x.com", "password": "legacy"})),
            None,
        )
        .await;
    assert_eq!(before.status, StatusCode::UNAUTHORIZED);

    let upgraded = upgrade_plaintext_passwords(&app.state.store.users, &app.state.password_hasher)
        .await
        .unwrap();
    assert_eq!(upgraded, 1);
    assert!(
        app.users_on_disk()[0]["password"]
            .as_str()
            .unwrap()
            .starts_with("$argon2id$")
    );

    app.login("old@x.com", "legacy").await;
}
