//! Db command - create and inspect the record database.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use wellrec_core::store::{SqliteStore, WellStore};

use super::config::load_config;

/// Arguments for the db command.
#[derive(Args)]
pub struct DbArgs {
    /// Database file (overrides config)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: DbCommand,
}

#[derive(Subcommand)]
enum DbCommand {
    /// Create the database file and tables
    Init,

    /// Show row counts
    Stats,
}

pub async fn run(args: DbArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut db_config = load_config(config_path)?.database;
    if let Some(path) = args.database {
        db_config.path = path;
    }

    let store = SqliteStore::open(&db_config)?;

    match args.command {
        DbCommand::Init => {
            println!(
                "{} Database ready at {}",
                style("✓").green(),
                store.path().display()
            );
        }
        DbCommand::Stats => {
            let counts = store.counts()?;
            println!("Database: {}", store.path().display());
            println!("  well_info:        {}", counts.wells);
            println!("  stimulation_data: {}", counts.stimulations);
        }
    }

    Ok(())
}
