//! CLI command implementations.

pub mod add;
pub mod check;
pub mod clear;
pub mod inspect;
pub mod list;
pub mod remove;

use badgedb_core::{CardStore, CardUid, StoreConfig};
use std::path::Path;

/// Builds a store config from the global CLI knobs.
pub fn store_config(capacity: usize, uid_size: usize, region_size: u32) -> StoreConfig {
    StoreConfig::new()
        .capacity(capacity)
        .uid_size(uid_size)
        .region_size(region_size)
}

/// Opens the store over the backing file.
pub fn open_store(
    path: &Path,
    config: StoreConfig,
) -> Result<CardStore, Box<dyn std::error::Error>> {
    Ok(CardStore::open_file(path, config)?)
}

/// Parses a hex UID argument and checks it against the configured width.
pub fn parse_uid(arg: &str, config: &StoreConfig) -> Result<CardUid, Box<dyn std::error::Error>> {
    let uid: CardUid = arg.parse()?;
    if uid.len() != config.uid_size {
        return Err(format!(
            "UID {} is {} bytes, store is configured for {}",
            uid,
            uid.len(),
            config.uid_size
        )
        .into());
    }
    Ok(uid)
}
