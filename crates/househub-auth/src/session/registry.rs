//! Session registry trait and its process-memory implementation.

use std::fmt::Debug;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};
use uuid::Uuid;

use househub_core::result::AppResult;
use househub_entity::user::UserId;

/// An opaque, unguessable session identifier carried in the session cookie.
pub type SessionToken = String;

/// Maps session tokens to user IDs.
#[async_trait]
pub trait SessionRegistry: Send + Sync + Debug + 'static {
    /// Issues a fresh token bound to `user_id`.
    async fn create(&self, user_id: UserId) -> AppResult<SessionToken>;

    /// Looks up the user bound to `token`. Unknown or empty tokens resolve to `None`.
    async fn resolve(&self, token: &str) -> Option<UserId>;

    /// Drops `token`. Revoking an unknown token is a no-op.
    async fn revoke(&self, token: &str);

    /// Number of live sessions.
    async fn active_count(&self) -> usize;
}

/// Session registry held in process memory. Sessions do not survive a restart.
#[derive(Debug, Default)]
pub struct MemorySessionRegistry {
    /// Token to user ID.
    sessions: DashMap<SessionToken, UserId>,
}

impl MemorySessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for MemorySessionRegistry {
    async fn create(&self, user_id: UserId) -> AppResult<SessionToken> {
        loop {
            let token = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = self.sessions.entry(token.clone()) {
                slot.insert(user_id);
                info!(user_id = user_id, "Session created");
                return Ok(token);
            }
        }
    }

    async fn resolve(&self, token: &str) -> Option<UserId> {
        if token.is_empty() {
            return None;
        }
        self.sessions.get(token).map(|entry| *entry.value())
    }

    async fn revoke(&self, token: &str) {
        if let Some((_, user_id)) = self.sessions.remove(token) {
            info!(user_id = user_id, "Session revoked");
        } else {
            debug!("Revoke for unknown session ignored");
        }
    }

    async fn active_count(&self) -> usize {
        self.sessions.len()
    }
}
