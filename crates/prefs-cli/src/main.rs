//! `playerprefs`: inspect and edit the Among Us playerPrefs file.
//!
//! # Usage
//!
//! ```text
//! playerprefs [OPTIONS] [COMMAND]
//!
//! Commands:
//!   show    Print every field (default)
//!   get     Print one field
//!   set     Change one field and write the file back
//!   codes   List the codes of an enumerated field
//!   fields  List the record schema
//!
//! Options:
//!   --file <PATH>     playerPrefs file [env: PLAYERPREFS_PATH]
//!   --config <PATH>   config file [default: platform config dir]
//! ```
//!
//! Log verbosity comes from `RUST_LOG`, else `logging.level` in the config
//! file, else `warn`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use prefs_cli::commands;
use prefs_cli::config::{load_config, CliConfig};
use prefs_cli::locate::resolve_prefs_path;
use prefs_core::Field;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit the Among Us playerPrefs file.
#[derive(Debug, Parser)]
#[command(name = "playerprefs", version)]
struct Cli {
    /// Path of the playerPrefs file.  Defaults to the game's location.
    #[arg(long, global = true, env = "PLAYERPREFS_PATH")]
    file: Option<PathBuf>,

    /// Path of the TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every field.
    Show {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print one field.
    Get {
        /// Field name, e.g. `hat` or `censor-chat`.
        field: Field,
    },
    /// Change one field and write the file back.
    Set {
        /// Field name, e.g. `color`.
        field: Field,
        /// The value as the file spells it, or a name for enumerated fields.
        value: String,
    },
    /// List the codes of an enumerated field.
    Codes {
        field: Field,
    },
    /// List the record schema.
    Fields,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The config names the log level, so it is loaded before logging starts.
    let config = load_config(cli.config.as_deref());
    let level = config
        .as_ref()
        .map_or_else(|_| CliConfig::default().logging.level, |c| c.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
    let config = config.context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Show { json: false }) {
        Command::Fields => print!("{}", commands::fields()),
        Command::Codes { field } => {
            let listing = commands::codes(field)
                .with_context(|| format!("field {field} is not an enumerated field"))?;
            print!("{listing}");
        }
        Command::Show { json } => {
            let path = resolve_prefs_path(cli.file.as_deref(), &config)?;
            let record = prefs_core::read(&path)?;
            debug!("decoded {}", path.display());
            if json {
                println!("{}", commands::show_json(&record)?);
            } else {
                print!("{}", commands::show(&record));
            }
        }
        Command::Get { field } => {
            let path = resolve_prefs_path(cli.file.as_deref(), &config)?;
            let record = prefs_core::read(&path)?;
            println!("{}", commands::get(&record, field));
        }
        Command::Set { field, value } => {
            let path = resolve_prefs_path(cli.file.as_deref(), &config)?;
            let mut record = prefs_core::read(&path)?;
            commands::set(&mut record, field, &value)
                .with_context(|| format!("cannot set {field} to {value:?}"))?;
            prefs_core::write(&path, &record)?;
            info!("updated {field} in {}", path.display());
            println!("{}", commands::get(&record, field));
        }
    }

    Ok(())
}
