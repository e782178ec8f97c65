//! BadgeDB CLI
//!
//! Command-line tools for managing a BadgeDB allow-list file.
//!
//! # Commands
//!
//! - `add` - Add a card UID to the allow-list
//! - `remove` - Remove a card UID from the allow-list
//! - `check` - Check whether a card UID is authorized
//! - `list` - List all stored UIDs in insertion order
//! - `clear` - Remove all stored UIDs
//! - `inspect` - Display store state and layout

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// BadgeDB command-line allow-list tools.
#[derive(Parser)]
#[command(name = "badgedb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the backing region file
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Record capacity of the store
    #[arg(global = true, long, default_value_t = 20)]
    capacity: usize,

    /// UID width in bytes
    #[arg(global = true, long, default_value_t = 4)]
    uid_size: usize,

    /// Reserved region size in bytes
    #[arg(global = true, long, default_value_t = 1024)]
    region_size: u32,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a card UID to the allow-list
    Add {
        /// Card UID in hex, e.g. AA:BB:CC:DD or aabbccdd
        uid: String,
    },

    /// Remove a card UID from the allow-list
    Remove {
        /// Card UID in hex
        uid: String,
    },

    /// Check whether a card UID is authorized (exit code 1 if not)
    Check {
        /// Card UID in hex
        uid: String,
    },

    /// List all stored UIDs in insertion order
    List,

    /// Remove all stored UIDs
    Clear {
        /// Confirm the wipe
        #[arg(short, long)]
        yes: bool,
    },

    /// Display store state and layout
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = commands::store_config(cli.capacity, cli.uid_size, cli.region_size);

    match cli.command {
        Commands::Add { uid } => {
            let path = cli.path.ok_or("Store path required for add")?;
            commands::add::run(&path, config, &uid)?;
        }
        Commands::Remove { uid } => {
            let path = cli.path.ok_or("Store path required for remove")?;
            commands::remove::run(&path, config, &uid)?;
        }
        Commands::Check { uid } => {
            let path = cli.path.ok_or("Store path required for check")?;
            if !commands::check::run(&path, config, &uid)? {
                std::process::exit(1);
            }
        }
        Commands::List => {
            let path = cli.path.ok_or("Store path required for list")?;
            commands::list::run(&path, config)?;
        }
        Commands::Clear { yes } => {
            let path = cli.path.ok_or("Store path required for clear")?;
            commands::clear::run(&path, config, yes)?;
        }
        Commands::Inspect { format } => {
            let path = cli.path.ok_or("Store path required for inspect")?;
            commands::inspect::run(&path, config, &format)?;
        }
        Commands::Version => {
            println!("BadgeDB CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("BadgeDB Core v{}", badgedb_core::VERSION);
        }
    }

    Ok(())
}
