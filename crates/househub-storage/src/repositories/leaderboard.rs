//! Leaderboard dataset repository.

use std::path::PathBuf;

use househub_core::result::AppResult;
use househub_entity::leaderboard::LeaderboardEntry;

use crate::json_file::JsonFile;

/// Read-only repository over `leaderboard.json`.
#[derive(Debug, Clone)]
pub struct LeaderboardRepository {
    file: JsonFile,
}

impl LeaderboardRepository {
    /// Creates a repository over the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    /// Loads the entries in file order.
    pub async fn find_all(&self) -> AppResult<Vec<LeaderboardEntry>> {
        self.file.read().await
    }
}
