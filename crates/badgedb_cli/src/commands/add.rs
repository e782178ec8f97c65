//! Add command implementation.

use badgedb_core::{InsertOutcome, StoreConfig};
use std::path::Path;
use tracing::info;

/// Runs the add command.
pub fn run(path: &Path, config: StoreConfig, uid: &str) -> Result<(), Box<dyn std::error::Error>> {
    let uid = super::parse_uid(uid, &config)?;
    let mut store = super::open_store(path, config)?;

    info!("Adding {} to {:?}", uid, path);
    let outcome = store.insert(uid.as_bytes())?;
    match outcome {
        InsertOutcome::Added => println!("{uid}: added ({} stored)", store.count()?),
        InsertOutcome::AlreadyExists => println!("{uid}: already exists"),
        InsertOutcome::Full => {
            println!("{uid}: store full ({} of {} slots)", store.count()?, store.capacity());
        }
    }

    Ok(())
}
