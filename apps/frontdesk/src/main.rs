//! # Rasa Ria Front Desk
//!
//! Menu-driven booking console for the hotel reception.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Front Desk Startup Flow                            │
//! │                                                                         │
//! │  1. Parse arguments (--config <path>)                                  │
//! │                                                                         │
//! │  2. Load FrontdeskConfig  (defaults → frontdesk.toml → RASA_* env)     │
//! │                                                                         │
//! │  3. Initialize tracing    (stderr, filter from [logging] / RASA_LOG)   │
//! │                                                                         │
//! │  4. Load bookings.txt     (missing file = empty hotel)                 │
//! │                                                                         │
//! │  5. Run the menu on stdin/stdout                                       │
//! │                                                                         │
//! │  6. Save bookings.txt and say goodbye                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod menu;
mod prompt;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::FrontdeskConfig;
use crate::menu::{Frontdesk, Today};
use crate::prompt::Console;

fn main() -> anyhow::Result<()> {
    let Some(config_path) = parse_args(std::env::args().skip(1))? else {
        return Ok(());
    };

    let config = FrontdeskConfig::load(config_path).context("Failed to load configuration")?;
    init_tracing(&config.logging.filter);

    info!(
        hotel = %config.hotel.name,
        bookings = ?config.storage.bookings_path,
        today_from_clock = config.session.today_from_clock,
        "Starting front desk"
    );

    let bookings_path = &config.storage.bookings_path;
    let loaded = rasa_storage::load_from_file(bookings_path)
        .with_context(|| format!("Failed to load {}", bookings_path.display()))?;

    let today = if config.session.today_from_clock {
        Today::Clock
    } else {
        Today::Prompt
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut desk = Frontdesk::new(loaded.store, console, today, config.hotel.name.as_str());

    desk.run()?;

    let (store, mut console) = desk.into_parts();
    if let Err(err) = rasa_storage::save_to_file(bookings_path, &store) {
        tracing::error!(%err, "Failed to save bookings");
        console.notice("Error: Unable to save bookings to file.")?;
        return Err(err).with_context(|| format!("Failed to save {}", bookings_path.display()));
    }

    console.say(format!(
        "\nThank you for using {} Room Booking System!",
        config.hotel.name
    ))?;
    Ok(())
}

/// Parses command line arguments.
///
/// Returns `None` when the program should exit straight away (after
/// `--help`), otherwise the explicit config path if one was given.
fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Option<Option<PathBuf>>> {
    let mut args = args;
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => bail!("--config needs a path"),
            },
            "--help" | "-h" => {
                println!("Rasa Ria Front Desk");
                println!();
                println!("Usage: frontdesk [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>  Config file (default: per-user frontdesk.toml)");
                println!("  -h, --help           Show this help message");
                return Ok(None);
            }
            other => bail!("Unknown argument '{}'. Try --help", other),
        }
    }

    Ok(Some(config_path))
}

/// Initializes the tracing subscriber.
///
/// Events go to stderr so they never interleave with the menu on stdout.
/// An unparsable filter falls back to `warn`.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
