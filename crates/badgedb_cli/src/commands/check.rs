//! Check command implementation.

use badgedb_core::StoreConfig;
use std::path::Path;

/// Runs the check command.
///
/// Returns whether the UID is present; the caller maps absence to a
/// nonzero exit code.
pub fn run(
    path: &Path,
    config: StoreConfig,
    uid: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let uid = super::parse_uid(uid, &config)?;
    let mut store = super::open_store(path, config)?;

    let authorized = store.contains(uid.as_bytes())?;
    if authorized {
        println!("{uid}: authorized");
    } else {
        println!("{uid}: not authorized");
    }

    Ok(authorized)
}
