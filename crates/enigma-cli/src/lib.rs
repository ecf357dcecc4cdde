//! Command-line front end for the Enigma machine.
//!
//! Turns the text a user types on the command line into a
//! [`MachineConfig`], and streams lines of input through a [`Machine`].
//!
//! ## Argument formats
//!
//! ```text
//! --positions 0,3,21     numeric, wrapped mod 26 (negatives allowed)
//! --positions ADV        window letters, left to right
//! --plug AB --plug CD    one pair per flag
//! --plug AB,CD,EF        or comma-separated
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::{BufRead, Write};

use enigma_core::{ConfigError, Machine, MachineConfig, ROTOR_COUNT, alphabet};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// Machine configuration rejected.
    #[error("invalid machine configuration: {0}")]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// `--positions` could not be parsed.
    #[error("invalid positions {value:?}: expected three numbers (0,3,21) or three letters (ADV)")]
    InvalidPosition {
        /// Argument as given.
        value: String,
    },
}

/// Parses a `--positions` argument.
///
/// Accepts three comma-separated integers or exactly three letters.
pub fn parse_positions(value: &str) -> Result<[i32; ROTOR_COUNT], CliError> {
    let invalid = || CliError::InvalidPosition { value: value.to_string() };
    let trimmed = value.trim();

    let parsed: Vec<i32> = if trimmed.contains(',') {
        trimmed
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?
    } else {
        trimmed
            .chars()
            .map(|ch| alphabet::signal_of(ch).map(i32::from))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?
    };

    parsed.try_into().map_err(|_| invalid())
}

/// Flattens repeated and comma-separated `--plug` arguments into pairs.
///
/// Blank entries are kept; the plugboard skips them.
pub fn parse_plugs<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .map(|pair| pair.trim().to_string())
        .collect()
}

/// Builds a machine configuration from raw command-line values.
pub fn build_config<S: AsRef<str>>(
    positions: Option<&str>,
    plugs: &[S],
) -> Result<MachineConfig, CliError> {
    let positions = positions.map(parse_positions).transpose()?.unwrap_or_default();
    Ok(MachineConfig::default().with_positions(positions).with_plug_pairs(parse_plugs(plugs)))
}

/// Encodes every line of `input` and writes one output line per input line.
///
/// Rotor state carries across lines. Returns the number of lines encoded.
pub fn encode_lines<R: BufRead, W: Write>(
    machine: &mut Machine,
    input: R,
    output: &mut W,
) -> Result<usize, CliError> {
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", machine.encode_text(&line))?;
        count += 1;
    }
    debug!(lines = count, window = %machine.window(), "input exhausted");
    Ok(count)
}
