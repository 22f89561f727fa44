//! CLI Configuration

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Name of the SQLite database inside the data directory.
const DATABASE_FILE: &str = "contacts.db";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for storage.
    pub data_dir: PathBuf,
}

impl CliConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        CliConfig {
            data_dir: data_dir.into(),
        }
    }

    /// Uses `<platform data dir>/carnet`, or `./carnet` when the platform
    /// has none.
    pub fn from_platform_dirs() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        CliConfig::new(base.join("carnet"))
    }

    /// Returns the storage path for Carnet data.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory {}",
                self.data_dir.display()
            )
        })
    }
}
