//! List command implementation.

use badgedb_core::StoreConfig;
use std::path::Path;

/// Runs the list command.
pub fn run(path: &Path, config: StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = super::open_store(path, config)?;

    let cards = store.cards()?;
    if cards.is_empty() {
        println!("(empty)");
        return Ok(());
    }

    for (index, uid) in cards.iter().enumerate() {
        println!("{index}: {uid}");
    }
    println!("{} of {} slots used", cards.len(), store.capacity());

    Ok(())
}
