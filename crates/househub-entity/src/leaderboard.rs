//! Leaderboard entry models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of `leaderboard.json`, kept as the raw object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaderboardEntry {
    pub fields: Map<String, Value>,
}

impl LeaderboardEntry {
    /// Points used for ordering. Anything other than a JSON number counts as zero.
    pub fn points(&self) -> f64 {
        self.fields
            .get("points")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

/// A leaderboard row with its final rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The row's own non-null `rank` as stored, or its 1-based position.
    pub rank: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
