//! Leaderboard handler.

use axum::Json;
use axum::extract::State;

use househub_entity::leaderboard::RankedEntry;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/leaderboard
pub async fn leaderboard(State(state): State<AppState>) -> Result<Json<Vec<RankedEntry>>, ApiError> {
    Ok(Json(state.leaderboard_service.ranked().await?))
}
