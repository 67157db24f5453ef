//! House list handler.

use axum::Json;
use axum::extract::State;

use househub_entity::house::House;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/houses
pub async fn list_houses(State(state): State<AppState>) -> Result<Json<Vec<House>>, ApiError> {
    Ok(Json(state.house_service.list().await?))
}
