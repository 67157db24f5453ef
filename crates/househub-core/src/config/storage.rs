//! Flat-file storage locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the JSON datasets and the frontend files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `users.json`, `houses.json` and `leaderboard.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Content root for pages (`html/`) and static assets.
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,
}

impl StorageConfig {
    /// Path of the user dataset.
    pub fn users_file(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    /// Path of the house list.
    pub fn houses_file(&self) -> PathBuf {
        self.data_dir.join("houses.json")
    }

    /// Path of the leaderboard dataset.
    pub fn leaderboard_file(&self) -> PathBuf {
        self.data_dir.join("leaderboard.json")
    }

    /// Directory holding the HTML pages.
    pub fn html_dir(&self) -> PathBuf {
        self.frontend_dir.join("html")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}
