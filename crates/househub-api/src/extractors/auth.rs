//! `SessionUser` extractor: resolves the session cookie to a user id for JSON endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_cookies::Cookies;

use househub_core::error::AppError;
use househub_entity::user::UserId;

use crate::cookie::session_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Request extension set by the route gate when the request carried a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

/// The authenticated user of an API request.
///
/// Rejects with a JSON 401 `Not authenticated` instead of redirecting.
#[derive(Debug, Clone, Copy)]
pub struct SessionUser(pub UserId);

impl SessionUser {
    pub fn id(&self) -> UserId {
        self.0
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(CurrentUser(user_id)) = parts.extensions.get::<CurrentUser>() {
            return Ok(Self(*user_id));
        }

        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal(msg))?;

        let token = session_token(&cookies, &state.config.session.cookie_name);
        let user_id = match token {
            Some(t) => state.sessions.resolve(&t).await,
            None => None,
        };

        user_id
            .map(Self)
            .ok_or_else(|| AppError::authentication("Not authenticated").into())
    }
}
