//! CLI Commands

pub mod contacts;
pub mod duplicates;

use anyhow::{Context, Result};
use carnet_core::{ContactId, Storage};

use crate::config::CliConfig;

/// Opens the address book, creating the data directory on first use.
pub fn open_storage(config: &CliConfig) -> Result<Storage> {
    config.ensure_data_dir()?;
    let path = config.storage_path();
    Storage::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}

/// Parses a contact ID argument.
pub fn parse_id(raw: &str) -> Result<ContactId> {
    raw.parse()
        .with_context(|| format!("Invalid contact ID '{}'", raw))
}
