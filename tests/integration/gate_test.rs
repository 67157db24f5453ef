//! Integration tests for the route gate and page serving.

use axum::http::StatusCode;

use crate::helpers::TestApp;

const PROTECTED: [&str; 7] = [
    "/",
    "/homepage",
    "/homepage.html",
    "/commonRoom",
    "/commonRoom.html",
    "/upcoming",
    "/upcoming.html",
];

#[tokio::test]
async fn test_protected_pages_redirect_without_session() {
    let app = TestApp::new().await;

    for path in PROTECTED {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::FOUND, "{path}");
        assert_eq!(response.location(), Some("/login"), "{path}");
    }
}

#[tokio::test]
async fn test_protected_pages_redirect_with_unknown_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/commonRoom", None, Some("forged")).await;
    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_query_string_does_not_bypass_gate() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/homepage?tab=houses", None, None).await;
    assert_eq!(response.status, StatusCode::FOUND);
}

#[tokio::test]
async fn test_protected_pages_served_with_session() {
    let app = TestApp::new().await;
    app.create_test_user("a@x.com", "pw", "A").await;
    let token = app.login("a@x.com", "pw").await;

    for path in PROTECTED {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.content_type(), Some("text/html"));
    }

    let root = app.request("GET", "/", None, Some(&token)).await;
    assert!(root.text.contains("homepage"));
}

#[tokio::test]
async fn test_pages_answer_any_method() {
    let app = TestApp::new().await;
    app.create_test_user("a@x.com", "pw", "A").await;
    let token = app.login("a@x.com", "pw").await;

    let post = app.request("POST", "/homepage", None, Some(&token)).await;
    assert_eq!(post.status, StatusCode::OK);
    assert!(post.text.contains("homepage"));

    let public = app.request("DELETE", "/login.html", None, None).await;
    assert_eq!(public.status, StatusCode::OK);

    let anonymous = app.request("POST", "/homepage", None, None).await;
    assert_eq!(anonymous.status, StatusCode::FOUND);
    assert_eq!(anonymous.location(), Some("/login"));
}

#[tokio::test]
async fn test_revoked_session_is_redirected() {
    let app = TestApp::new().await;
    app.create_test_user("a@x.com", "pw", "A").await;
    let token = app.login("a@x.com", "pw").await;

    app.request("POST", "/api/logout", None, Some(&token)).await;

    let response = app.request("GET", "/upcoming", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::FOUND);
}

#[tokio::test]
async fn test_public_pages_need_no_session() {
    let app = TestApp::new().await;

    for path in ["/login", "/login.html"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.text.contains("login"));
    }
}

#[tokio::test]
async fn test_missing_page_file_is_html_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/signin", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.content_type(), Some("text/html"));
    assert_eq!(response.text, "<h1>404 Not Found</h1>");
}
