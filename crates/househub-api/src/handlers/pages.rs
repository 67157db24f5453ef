//! HTML page routes.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::state::AppState;

/// Every page path and the file (without `.html`) it serves.
pub const PAGE_ROUTES: [(&str, &str); 11] = [
    ("/", "homepage"),
    ("/homepage", "homepage"),
    ("/homepage.html", "homepage"),
    ("/login", "login"),
    ("/login.html", "login"),
    ("/signin", "signin"),
    ("/signin.html", "signin"),
    ("/upcoming", "upcoming"),
    ("/upcoming.html", "upcoming"),
    ("/commonRoom", "commonRoom"),
    ("/commonRoom.html", "commonRoom"),
];

/// Whether `path` is one of the page routes.
pub fn is_page_route(path: &str) -> bool {
    PAGE_ROUTES.iter().any(|(route, _)| *route == path)
}

/// Serves `<frontend>/html/<page>.html`, or the HTML 404 when it is missing.
pub async fn serve_page(state: AppState, page: &'static str) -> Response {
    let file = state.config.storage.html_dir().join(format!("{page}.html"));
    match tokio::fs::read(&file).await {
        Ok(data) => ([(header::CONTENT_TYPE, "text/html")], data).into_response(),
        Err(e) => {
            warn!(page = page, error = %e, "Page file unavailable");
            not_found_html()
        }
    }
}

/// `404` with `<h1>404 Not Found</h1>`.
pub fn not_found_html() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html")],
        "<h1>404 Not Found</h1>",
    )
        .into_response()
}

/// `404` with a plain-text `Not Found`.
pub fn not_found_plain() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "Not Found",
    )
        .into_response()
}
