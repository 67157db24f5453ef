//! Whole-document JSON file access.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use househub_core::error::{AppError, ErrorKind};
use househub_core::result::AppResult;

/// A JSON document on disk that is read and replaced as a unit.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a concurrent reader sees either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonFile {
    /// Location of the document.
    path: PathBuf,
}

impl JsonFile {
    /// Create a handle for the document at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and decode the document. A missing file is a storage error.
    pub async fn read<T: DeserializeOwned>(&self) -> AppResult<T> {
        let data = fs::read(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read dataset: {}", self.path.display()),
                e,
            )
        })?;
        self.decode(&data)
    }

    /// Read and decode the document, treating a missing file as `T::default()`.
    pub async fn read_or_default<T: DeserializeOwned + Default>(&self) -> AppResult<T> {
        match fs::read(&self.path).await {
            Ok(data) => self.decode(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Dataset missing, using empty default");
                Ok(T::default())
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read dataset: {}", self.path.display()),
                e,
            )),
        }
    }

    /// Encode `value` as pretty-printed JSON and atomically replace the document.
    pub async fn write<T: Serialize>(&self, value: &T) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(value)?;
        let tmp = self.temp_path();

        fs::write(&tmp, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write temp file: {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace dataset: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), bytes = data.len(), "Dataset written");
        Ok(())
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> AppResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed dataset {}: {e}", self.path.display()),
                e,
            )
        })
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}
