//! `JsonBody` extractor: bounded, time-limited JSON request bodies.

use std::time::Duration;

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use househub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// A JSON request body read under the configured size and time limits.
///
/// An empty body deserializes as `T::default()`. Oversized, slow, or
/// malformed bodies are rejected as validation errors (400).
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T> FromRequest<AppState> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let limits = &state.config.server;
        let timeout = Duration::from_secs(limits.body_timeout_seconds);

        let bytes = tokio::time::timeout(
            timeout,
            axum::body::to_bytes(req.into_body(), limits.max_body_bytes),
        )
        .await
        .map_err(|_| AppError::validation("Request body timed out"))?
        .map_err(|e| {
            debug!(error = %e, "Rejected request body");
            AppError::validation("Request body too large")
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            debug!(error = %e, "Malformed JSON body");
            AppError::validation("Invalid JSON body").into()
        })
    }
}
