//! Leaderboard ranking.

use std::sync::Arc;

use serde_json::Value;

use househub_core::result::AppResult;
use househub_entity::leaderboard::{LeaderboardEntry, RankedEntry};
use househub_storage::repositories::LeaderboardRepository;

/// Serves the ranked leaderboard.
#[derive(Debug, Clone)]
pub struct LeaderboardService {
    leaderboard: Arc<LeaderboardRepository>,
}

impl LeaderboardService {
    pub fn new(leaderboard: Arc<LeaderboardRepository>) -> Self {
        Self { leaderboard }
    }

    /// Loads the leaderboard and ranks it.
    pub async fn ranked(&self) -> AppResult<Vec<RankedEntry>> {
        let entries = self.leaderboard.find_all().await?;
        Ok(rank_entries(entries))
    }
}

/// Orders entries by points, highest first, and assigns ranks.
///
/// The sort is stable, so entries with equal points keep their file order.
/// Missing or non-numeric `points` sort as zero. A non-null `rank` is kept
/// whatever its type; otherwise the entry's 1-based position is used.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.points().total_cmp(&a.points()));
    entries
        .into_iter()
        .zip(1u64..)
        .map(|(entry, position)| {
            let mut fields = entry.fields;
            let rank = fields
                .remove("rank")
                .filter(|r| !r.is_null())
                .unwrap_or_else(|| Value::from(position));
            RankedEntry { rank, fields }
        })
        .collect()
}
