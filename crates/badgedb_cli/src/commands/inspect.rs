//! Inspect command implementation.

use badgedb_core::StoreConfig;
use serde::Serialize;
use std::path::Path;

/// Store inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Backing file path.
    pub path: String,
    /// Whether the region carries the init sentinel.
    pub initialized: bool,
    /// Raw persisted record count.
    pub count: u8,
    /// Configured record capacity.
    pub capacity: usize,
    /// UID width in bytes.
    pub uid_size: usize,
    /// Reserved region size in bytes.
    pub region_size: u32,
    /// Bytes the layout actually occupies.
    pub layout_size: u32,
}

/// Runs the inspect command.
pub fn run(path: &Path, config: StoreConfig, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("No store found at {:?}", path).into());
    }

    let mut store = super::open_store(path, config)?;

    let result = InspectResult {
        path: path.display().to_string(),
        initialized: store.is_initialized()?,
        count: store.count()?,
        capacity: store.capacity(),
        uid_size: store.uid_size(),
        region_size: config.region_size,
        layout_size: config.layout_size(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => {
            println!("Store: {}", result.path);
            println!("  initialized: {}", result.initialized);
            println!("  records:     {} / {}", result.count, result.capacity);
            println!("  uid width:   {} bytes", result.uid_size);
            println!(
                "  region:      {} bytes ({} used by layout)",
                result.region_size, result.layout_size
            );
        }
        other => return Err(format!("unknown format: {}", other).into()),
    }

    Ok(())
}
