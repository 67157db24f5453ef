//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Session cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Where unauthenticated visitors of protected pages are sent.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            login_path: default_login_path(),
        }
    }
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}
