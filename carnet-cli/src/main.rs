//! Carnet CLI
//!
//! Command-line interface for Carnet - an address book that finds and merges
//! duplicate contacts.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use commands::contacts::NewContact;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "carnet")]
#[command(version, about = "Address book with duplicate detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: platform data dir + /carnet)
    #[arg(long, global = true, env = "CARNET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a contact
    Add {
        /// Last name
        last_name: String,

        /// First name
        first_name: String,

        /// Email address (must be unique)
        email: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Postal address
        #[arg(long)]
        address: Option<String>,

        /// City
        #[arg(long)]
        city: Option<String>,

        /// Country
        #[arg(long)]
        country: Option<String>,
    },

    /// List contacts
    List {
        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },

    /// Show a contact
    Show {
        /// Contact ID
        id: String,
    },

    /// Search contacts by name
    Search {
        /// Part of a last or first name
        query: String,
    },

    /// Remove a contact
    Remove {
        /// Contact ID
        id: String,
    },

    /// Toggle the favorite marker on a contact
    Favorite {
        /// Contact ID
        id: String,
    },

    /// List likely duplicate pairs
    Duplicates {
        /// Print pairs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge SOURCE into TARGET and delete SOURCE
    Merge {
        /// Contact that is kept
        target: String,

        /// Contact that is folded in and deleted
        source: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "carnet=debug" } else { "carnet=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.data_dir {
        Some(data_dir) => CliConfig::new(data_dir),
        None => CliConfig::from_platform_dirs(),
    };

    match cli.command {
        Commands::Add {
            last_name,
            first_name,
            email,
            phone,
            address,
            city,
            country,
        } => {
            let contact = NewContact {
                last_name,
                first_name,
                email,
                phone,
                address,
                city,
                country,
            };
            commands::contacts::add(&config, contact)?;
        }
        Commands::List { favorites } => commands::contacts::list(&config, favorites)?,
        Commands::Show { id } => commands::contacts::show(&config, &id)?,
        Commands::Search { query } => commands::contacts::search(&config, &query)?,
        Commands::Remove { id } => commands::contacts::remove(&config, &id)?,
        Commands::Favorite { id } => commands::contacts::favorite(&config, &id)?,
        Commands::Duplicates { json } => commands::duplicates::list(&config, json)?,
        Commands::Merge {
            target,
            source,
            yes,
        } => commands::duplicates::merge(&config, &target, &source, yes)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "carnet", &mut io::stdout());
        }
    }

    Ok(())
}
