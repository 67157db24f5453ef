//! House list repository.

use std::path::PathBuf;

use househub_core::result::AppResult;
use househub_entity::house::House;

use crate::json_file::JsonFile;

/// Read-only repository over `houses.json`.
#[derive(Debug, Clone)]
pub struct HouseRepository {
    file: JsonFile,
}

impl HouseRepository {
    /// Creates a repository over the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    /// Loads the full house list.
    pub async fn find_all(&self) -> AppResult<Vec<House>> {
        self.file.read().await
    }
}
