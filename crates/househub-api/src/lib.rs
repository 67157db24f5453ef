//! # househub-api
//!
//! HTTP layer for HouseHub built on Axum.
//!
//! Provides the JSON endpoints, the page and asset routes, the route gate
//! middleware, session cookie handling, extractors, DTOs, and error mapping.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
