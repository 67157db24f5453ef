//! Integration tests for the read-only JSON endpoints, assets and 404 handling.

use axum::http::StatusCode;
use serde_json::json;

use househub_auth::password::PasswordHasher;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_leaderboard_is_ranked() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/leaderboard", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {"rank": 1, "name": "Red", "points": 120},
            {"rank": 2, "name": "Blue", "points": 95},
            {"rank": 9, "name": "Gold", "points": 95},
            {"rank": 4, "name": "Green"}
        ])
    );
}

#[tokio::test]
async fn test_houses_listed_as_stored() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/houses", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body[0]["name"], "Red");
    assert_eq!(response.body[1]["color"], "#0000aa");
}

#[tokio::test]
async fn test_loosely_typed_datasets_pass_through() {
    let app = TestApp::new().await;
    app.write_dataset(
        "houses.json",
        json!([
            {"id": "r", "name": "Red", "points": 12.5},
            {"id": 2, "name": "Blue", "points": "n/a", "color": null}
        ]),
    );
    app.write_dataset(
        "leaderboard.json",
        json!([
            {"name": "Text", "points": "lots"},
            {"name": "Half", "points": 10.5},
            {"name": "Ordinal", "points": 10, "rank": "1st"}
        ]),
    );

    let houses = app.request("GET", "/api/houses", None, None).await;
    assert_eq!(houses.status, StatusCode::OK);
    assert_eq!(houses.body[0], json!({"id": "r", "name": "Red", "points": 12.5}));
    assert_eq!(houses.body[1]["points"], "n/a");

    let leaderboard = app.request("GET", "/api/leaderboard", None, None).await;
    assert_eq!(leaderboard.status, StatusCode::OK);
    assert_eq!(
        leaderboard.body,
        json!([
            {"rank": 1, "name": "Half", "points": 10.5},
            {"rank": "1st", "name": "Ordinal", "points": 10},
            {"rank": 3, "name": "Text", "points": "lots"}
        ])
    );

    let signup = app
        .request(
            "POST",
            "/api/signup",
            Some(json!({
                "name": "Ginny",
                "email": "ginny@x.com",
                "password": "bat",
                "confirmPassword": "bat",
                "house": "Red"
            })),
            None,
        )
        .await;
    assert_eq!(signup.status, StatusCode::CREATED);
    assert_eq!(signup.body["user"]["house"], "Red");
}

#[tokio::test]
async fn test_loosely_typed_user_records_do_not_block_login() {
    let hash = PasswordHasher::new().hash_password("owl").unwrap();
    let app = TestApp::with_users(json!([
        {"id": 1, "email": "odd@x.com", "password": "legacy", "lastActive": "2025-01-02",
         "points": 3.5, "badges": "none", "level": "novice"},
        {"id": 2, "email": "harry@x.com", "password": hash, "name": "Harry", "lastActive": "2025-01-02"}
    ]))
    .await;

    let token = app.login("harry@x.com", "owl").await;
    let me = app.request("GET", "/api/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["lastActive"], "2025-01-02");
    assert!(me.body.get("password").is_none());
}

#[tokio::test]
async fn test_missing_dataset_is_server_error() {
    let app = TestApp::new().await;
    std::fs::remove_file(app.dir.path().join("data").join("leaderboard.json")).unwrap();

    let response = app.request("GET", "/api/leaderboard", None, None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({"error": "Server error"}));
}

#[tokio::test]
async fn test_static_asset_served_with_mime() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/css/site.css", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type(), Some("text/css"));
    assert_eq!(response.text, "body { margin: 0; }");
}

#[tokio::test]
async fn test_missing_asset_is_html_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/img/missing.png", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "<h1>404 Not Found</h1>");
}

#[tokio::test]
async fn test_parent_directory_asset_rejected() {
    let app = TestApp::new().await;
    std::fs::write(app.dir.path().join("secret.css"), "leak").unwrap();

    let response = app.request("GET", "/css/../../secret.css", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(!response.text.contains("leak"));
}

#[tokio::test]
async fn test_unlisted_extension_not_served() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/data/users.json", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.content_type(), Some("text/plain"));
    assert_eq!(response.text, "Not Found");
}

#[tokio::test]
async fn test_unknown_html_path_is_html_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/nowhere.html", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.content_type(), Some("text/html"));
}

#[tokio::test]
async fn test_unknown_path_is_plain_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/nowhere", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text, "Not Found");
}
