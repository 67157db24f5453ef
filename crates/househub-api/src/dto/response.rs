//! Response DTOs.

use serde::{Deserialize, Serialize};

use househub_entity::user::{UserIdentity, UserProfile};

/// `{ "ok": true }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: UserIdentity,
}

/// Successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub ok: bool,
    pub user: UserProfile,
}
