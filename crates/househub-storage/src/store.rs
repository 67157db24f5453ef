//! Opens every dataset from the storage configuration.

use std::sync::Arc;

use tokio::fs;
use tracing::info;

use househub_core::config::storage::StorageConfig;
use househub_core::error::{AppError, ErrorKind};
use househub_core::result::AppResult;

use crate::repositories::{HouseRepository, LeaderboardRepository, UserRepository};

/// All repositories of one data directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    pub users: Arc<UserRepository>,
    pub houses: Arc<HouseRepository>,
    pub leaderboard: Arc<LeaderboardRepository>,
}

impl DataStore {
    /// Creates the data directory if needed and opens the repositories.
    pub async fn open(config: &StorageConfig) -> AppResult<Self> {
        fs::create_dir_all(&config.data_dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!(
                    "Failed to create data directory: {}",
                    config.data_dir.display()
                ),
                e,
            )
        })?;

        info!(data_dir = %config.data_dir.display(), "Data store opened");

        Ok(Self {
            users: Arc::new(UserRepository::new(config.users_file())),
            houses: Arc::new(HouseRepository::new(config.houses_file())),
            leaderboard: Arc::new(LeaderboardRepository::new(config.leaderboard_file())),
        })
    }
}
