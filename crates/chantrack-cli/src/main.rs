//! # chantrack-cli
//!
//! Command-line wrapper around the record store:
//! - explicit schema migration (`migrate`)
//! - channel / revision inserts
//! - lookups and diagnostic listings
//!
//! The database location comes from a TOML config file (see
//! [`chantrack_store::StoreConfig`]); `--db` opens an explicit file instead.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chantrack_store::{Channel, Database, Revision, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "chantrack")]
#[command(about = "Tracked-channel record store", long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = "chantrack.toml")]
    config: PathBuf,

    /// Open this database file directly, ignoring the config file.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the schema if it is not present. Idempotent; run once per
    /// deployment before anything else.
    Migrate,
    /// Start tracking a channel.
    AddChannel {
        channel_id: i64,
        title: String,
        /// Record the channel but leave monitoring off.
        #[arg(long)]
        disabled: bool,
    },
    /// Record a revision marker for a channel on a date (YYYY-MM-DD).
    AddRevision { channel_id: i64, date: NaiveDate },
    /// Show a single channel.
    Channel { channel_id: i64 },
    /// Show a single revision.
    Revision { channel_id: i64, date: NaiveDate },
    /// Print all tracked channels.
    ListChannels,
    /// Print all recorded revisions.
    ListRevisions,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        if needs_migrate_hint(&e) {
            eprintln!("Hint: run `chantrack migrate` to create the schema.");
        }
        std::process::exit(1);
    }
}

/// True when the failure means the schema was never created.
fn needs_migrate_hint(err: &anyhow::Error) -> bool {
    err.to_string().contains("no such table")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let db = open_database(&cli)?;

    match cli.command {
        Commands::Migrate => {
            db.migrate()?;
            info!("schema is up to date");
        }
        Commands::AddChannel {
            channel_id,
            title,
            disabled,
        } => {
            let channel = Channel {
                channel_id,
                title,
                enable: !disabled,
            };
            db.add_channel(&channel)?;
            println!("{channel}");
        }
        Commands::AddRevision { channel_id, date } => {
            let revision = Revision { channel_id, date };
            db.add_revision(&revision)?;
            println!("{revision}");
        }
        Commands::Channel { channel_id } => match db.channel_by_id(channel_id)? {
            Some(channel) => println!("{channel}"),
            None => println!("channel {channel_id}: not found"),
        },
        Commands::Revision { channel_id, date } => {
            match db.revision_by_id_and_date(channel_id, date)? {
                Some(revision) => println!("{revision}"),
                None => println!("revision ({channel_id}, {date}): not found"),
            }
        }
        Commands::ListChannels => db.print_channels()?,
        Commands::ListRevisions => db.print_revisions()?,
    }

    Ok(())
}

/// Open the store from `--db` when given, otherwise from configuration.
///
/// A missing config file falls back to the defaults so local development
/// works with zero configuration; an unreadable or invalid file is an error.
fn open_database(cli: &Cli) -> anyhow::Result<Database> {
    if let Some(path) = &cli.db {
        return Ok(Database::open_at(path)?);
    }

    let config = if cli.config.exists() {
        StoreConfig::load(&cli.config)?
    } else {
        info!(path = %cli.config.display(), "config file not found, using defaults");
        StoreConfig::default()
    };

    Ok(Database::connect(&config)?)
}
