//! Per-request access decision for protected pages.

use std::sync::Arc;

use tracing::debug;

use househub_entity::user::UserId;

use crate::session::SessionRegistry;

/// Paths that require a live session. Everything else is public.
pub const PROTECTED_PATHS: [&str; 7] = [
    "/",
    "/homepage",
    "/homepage.html",
    "/commonRoom",
    "/commonRoom.html",
    "/upcoming",
    "/upcoming.html",
];

/// Outcome of evaluating a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request through. Carries the resolved user when a session was presented.
    Allow { user_id: Option<UserId> },
    /// Protected path without a valid session.
    Redirect { location: String },
}

/// Decides whether a request may reach its handler.
#[derive(Debug, Clone)]
pub struct RouteGate {
    registry: Arc<dyn SessionRegistry>,
    login_path: String,
}

impl RouteGate {
    pub fn new(registry: Arc<dyn SessionRegistry>, login_path: impl Into<String>) -> Self {
        Self {
            registry,
            login_path: login_path.into(),
        }
    }

    /// Evaluates `path` (query string allowed) with the session token the client presented.
    pub async fn evaluate(&self, path: &str, token: Option<&str>) -> GateDecision {
        let path = path.split_once('?').map_or(path, |(p, _)| p);

        let user_id = match token {
            Some(t) => self.registry.resolve(t).await,
            None => None,
        };

        if user_id.is_none() && is_protected(path) {
            debug!(path = %path, "Protected path without session, redirecting");
            return GateDecision::Redirect {
                location: self.login_path.clone(),
            };
        }

        GateDecision::Allow { user_id }
    }
}

/// Whether `path` (without query) is in the protected set. Matching is exact.
fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.contains(&path)
}
