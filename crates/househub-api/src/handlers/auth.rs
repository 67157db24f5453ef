//! Auth handlers: login, logout, signup, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tower_cookies::Cookies;
use tracing::info;
use validator::Validate;

use househub_core::error::AppError;
use househub_entity::user::UserProfile;

use crate::cookie;
use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{LoginResponse, OkResponse, SignupResponse};
use crate::error::ApiError;
use crate::extractors::{JsonBody, SessionUser};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email and password are required"))?;
    let (email, password) = req.into_credentials();

    let user = state.verifier.verify(&email, &password).await?;
    let token = state.sessions.create(user.id).await?;
    cookie::issue_session(&cookies, &state.config.session.cookie_name, token);

    info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse { ok: true, user }))
}

/// POST /api/logout
pub async fn logout(State(state): State<AppState>, cookies: Cookies) -> Json<OkResponse> {
    let name = &state.config.session.cookie_name;
    if let Some(token) = cookie::session_token(&cookies, name) {
        state.sessions.revoke(&token).await;
    }
    cookie::clear_session(&cookies, name);

    Json(OkResponse::new())
}

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(req): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("All fields are required"))?;

    let user = state.account_service.signup(req.into()).await?;
    let token = state.sessions.create(user.id).await?;
    cookie::issue_session(&cookies, &state.config.session.cookie_name, token);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            ok: true,
            user: UserProfile::from(user),
        }),
    ))
}

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.account_service.profile(user.id()).await?;
    Ok(Json(profile))
}
