//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encode a single message from the default AAA start
//! enigma --text "HELLO WORLD"
//!
//! # Set positions and plugs, then decode line by line from stdin
//! enigma --positions MCN --plug QW --plug AB,CD < message.txt
//! ```

use std::io::{self, Write};

use clap::Parser;
use enigma_cli::{build_config, encode_lines};
use enigma_core::Machine;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Enigma machine simulator
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Three-rotor Enigma cipher machine simulator")]
#[command(version)]
struct Args {
    /// Starting rotor positions, as "0,3,21" or window letters "ADV"
    #[arg(short, long)]
    positions: Option<String>,

    /// Plugboard pair (repeatable or comma-separated); at most 3 are used
    #[arg(long = "plug", value_name = "PAIR")]
    plugs: Vec<String>,

    /// Text to encode; reads stdin line by line when absent
    #[arg(short, long)]
    text: Option<String>,

    /// Print the final window letters after encoding
    #[arg(long)]
    show_positions: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let config = build_config(args.positions.as_deref(), &args.plugs)?;
    let mut machine = Machine::from_config(&config)?;
    tracing::info!(window = %machine.window(), "machine configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.text {
        Some(text) => writeln!(out, "{}", machine.encode_text(text))?,
        None => {
            encode_lines(&mut machine, io::stdin().lock(), &mut out)?;
        },
    }

    if args.show_positions {
        writeln!(out, "{}", machine.window())?;
    }

    Ok(())
}
