//! Remove command implementation.

use badgedb_core::{RemoveOutcome, StoreConfig};
use std::path::Path;
use tracing::info;

/// Runs the remove command.
pub fn run(path: &Path, config: StoreConfig, uid: &str) -> Result<(), Box<dyn std::error::Error>> {
    let uid = super::parse_uid(uid, &config)?;
    let mut store = super::open_store(path, config)?;

    info!("Removing {} from {:?}", uid, path);
    match store.remove(uid.as_bytes())? {
        RemoveOutcome::Removed => println!("{uid}: removed ({} stored)", store.count()?),
        RemoveOutcome::NotFound => println!("{uid}: not found"),
    }

    Ok(())
}
