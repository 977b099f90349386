//! Local data
//!
//! Built-in demo content and the settings file. Chat messages are kept in
//! memory only.

pub mod demo;
pub mod settings;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine the data directory")]
    NoDataDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Platform data directory of the application
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    ProjectDirs::from("dev", "CompanionChat", "companion-chat")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
