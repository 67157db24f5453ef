//! Static assets and the catch-all 404.

use std::path::{Component, Path};

use axum::extract::State;
use axum::http::{Uri, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::pages::{is_page_route, not_found_html, not_found_plain};
use crate::state::AppState;

/// MIME type for an allow-listed asset extension.
pub fn mime_for(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "css" => "text/css",
        "js" => "text/javascript",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

fn has_html_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html"))
}

/// Fallback for every path no route matched.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();

    if let Some(mime) = mime_for(path) {
        let relative = Path::new(path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            debug!(path = %path, "Rejected asset path");
            return not_found_html();
        }

        let file = state.config.storage.frontend_dir.join(relative);
        return match tokio::fs::read(&file).await {
            Ok(data) => ([(header::CONTENT_TYPE, mime)], data).into_response(),
            Err(_) => not_found_html(),
        };
    }

    if is_page_route(path) || has_html_extension(path) {
        return not_found_html();
    }
    not_found_plain()
}
