//! Request DTOs with validation.
//!
//! Every field is optional at the serde level so a missing field reaches
//! validation instead of failing deserialization.

use serde::{Deserialize, Serialize};
use validator::Validate;

use househub_service::SignupInput;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// The validated `(email, password)` pair.
    pub fn into_credentials(self) -> (String, String) {
        (
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Signup request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub confirm_password: Option<String>,
    /// Preferred house name.
    pub house: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
            confirm_password: req.confirm_password.unwrap_or_default(),
            house: req.house.filter(|h| !h.is_empty()),
        }
    }
}
