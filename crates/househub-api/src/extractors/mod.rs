//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{CurrentUser, SessionUser};
pub use json::JsonBody;
