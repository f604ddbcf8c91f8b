//! mmdb - terminal movie catalogue manager
//!
//! Thin presentation layer over `mmdb-core`: an interactive numbered menu
//! that prompts, validates, and renders the core's query results. All
//! catalogue semantics live in the core.

use anyhow::Result;
use clap::Parser;
use mmdb_core::{config, Catalog};
use std::path::PathBuf;
use tracing::info;

mod menu;
mod seed;

/// Command-line arguments for mmdb
#[derive(Parser, Debug)]
#[command(name = "mmdb")]
#[command(about = "My Movies Database - terminal movie catalogue manager")]
#[command(version)]
struct Args {
    /// Path to the JSON database file
    #[arg(short, long, env = "MMDB_DATABASE")]
    database: Option<PathBuf>,

    /// Populate an absent database with the ten sample movies
    #[arg(long)]
    seed: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mmdb=warn".into()),
        )
        .init();

    let args = Args::parse();

    let db_path = config::resolve_database_path(args.database.as_deref());
    config::ensure_parent_dir(&db_path)?;
    info!("database path: {}", db_path.display());

    let catalog = Catalog::open(&db_path);
    if args.seed {
        seed::seed_if_absent(&catalog, &db_path)?;
    }

    menu::run(&catalog)?;
    Ok(())
}
