//! Clear command implementation.

use badgedb_core::StoreConfig;
use std::path::Path;
use tracing::info;

/// Runs the clear command.
pub fn run(path: &Path, config: StoreConfig, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("clear wipes every stored UID; pass --yes to confirm".into());
    }

    let mut store = super::open_store(path, config)?;
    let before = store.count()?;

    info!("Clearing {:?} ({} records)", path, before);
    store.clear()?;
    println!("cleared {before} record(s)");

    Ok(())
}
