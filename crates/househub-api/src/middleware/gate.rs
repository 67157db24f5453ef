//! Route gate middleware for protected pages.

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_cookies::Cookies;

use househub_auth::gate::GateDecision;

use crate::cookie::session_token;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Runs the route gate before the handler.
///
/// Redirects (302) to the login page when a protected path is requested
/// without a live session. Otherwise forwards the request, attaching
/// [`CurrentUser`] when the session resolved.
pub async fn route_gate(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    let token = session_token(&cookies, &state.config.session.cookie_name);

    let decision = state
        .gate
        .evaluate(request.uri().path(), token.as_deref())
        .await;

    match decision {
        GateDecision::Redirect { location } => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        GateDecision::Allow { user_id } => {
            if let Some(id) = user_id {
                request.extensions_mut().insert(CurrentUser(id));
            }
            next.run(request).await
        }
    }
}
