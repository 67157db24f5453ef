//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use househub_auth::credentials::CredentialVerifier;
use househub_auth::gate::RouteGate;
use househub_auth::password::PasswordHasher;
use househub_auth::session::{MemorySessionRegistry, SessionRegistry};
use househub_core::config::AppConfig;
use househub_core::result::AppResult;
use househub_service::{AccountService, HouseService, LeaderboardService};
use househub_storage::DataStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Storage ──────────────────────────────────────────────
    /// Flat-file repositories
    pub store: DataStore,

    // ── Auth ─────────────────────────────────────────────────
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Email/password verifier
    pub verifier: Arc<CredentialVerifier>,
    /// Token → user id table
    pub sessions: Arc<dyn SessionRegistry>,
    /// Protected-page gate
    pub gate: Arc<RouteGate>,

    // ── Services ─────────────────────────────────────────────
    pub account_service: Arc<AccountService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub house_service: Arc<HouseService>,
}

impl AppState {
    /// Wires every dependency over an opened data store with a fresh,
    /// empty in-memory session registry.
    pub fn new(config: AppConfig, store: DataStore) -> AppResult<Self> {
        let sessions: Arc<dyn SessionRegistry> = Arc::new(MemorySessionRegistry::new());
        Self::with_sessions(config, store, sessions)
    }

    /// Like [`AppState::new`] with a caller-supplied session registry.
    pub fn with_sessions(
        config: AppConfig,
        store: DataStore,
        sessions: Arc<dyn SessionRegistry>,
    ) -> AppResult<Self> {
        let password_hasher = Arc::new(PasswordHasher::new());
        let verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&store.users),
            Arc::clone(&password_hasher),
        )?);
        let gate = Arc::new(RouteGate::new(
            Arc::clone(&sessions),
            config.session.login_path.clone(),
        ));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&store.users),
            Arc::clone(&store.houses),
            Arc::clone(&password_hasher),
        ));
        let leaderboard_service = Arc::new(LeaderboardService::new(Arc::clone(&store.leaderboard)));
        let house_service = Arc::new(HouseService::new(Arc::clone(&store.houses)));

        Ok(Self {
            config: Arc::new(config),
            store,
            password_hasher,
            verifier,
            sessions,
            gate,
            account_service,
            leaderboard_service,
            house_service,
        })
    }
}
