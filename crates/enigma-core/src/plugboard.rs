//! Plugboard: letter swaps applied before and after the rotor stack.
//!
//! # Invariants
//!
//! - Involution: `swap(swap(x)) == x` for every `x`, whatever pairs were
//!   supplied. A letter can sit in at most one pair; a second use is a
//!   [`ConfigError::PlugAlreadyUsed`], never a silent rewiring.
//! - At most [`MAX_PLUG_PAIRS`] pairs are connected. Extra pairs are dropped
//!   before validation, with a warning.

use std::fmt;

use tracing::warn;

use crate::{
    alphabet::{self, LEN},
    error::ConfigError,
};

/// Maximum number of connected pairs. Later pairs are ignored.
pub const MAX_PLUG_PAIRS: usize = 3;

/// Two distinct letters joined by a cable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugPair {
    a: u8,
    b: u8,
}

impl PlugPair {
    /// Joins two letters, case-insensitively.
    pub fn new(a: char, b: char) -> Result<Self, ConfigError> {
        let first = alphabet::signal_of(a).ok_or(ConfigError::InvalidPlugLetter { ch: a })?;
        let second = alphabet::signal_of(b).ok_or(ConfigError::InvalidPlugLetter { ch: b })?;
        if first == second {
            return Err(ConfigError::SelfPlug { letter: alphabet::letter_of(first) });
        }
        Ok(Self { a: first, b: second })
    }

    /// Parses a two-letter pair such as `"AB"` or `"qw"`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(pair: &str) -> Result<Self, ConfigError> {
        let mut chars = pair.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => Self::new(a, b),
            _ => Err(ConfigError::MalformedPlugPair { pair: pair.to_string() }),
        }
    }

    /// The two letters, uppercase, in the order given.
    pub fn letters(self) -> (char, char) {
        (alphabet::letter_of(self.a), alphabet::letter_of(self.b))
    }
}

impl fmt::Debug for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.letters();
        write!(f, "PlugPair({a}{b})")
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.letters();
        write!(f, "{a}{b}")
    }
}

/// Symmetric letter swap table.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; LEN as usize],
    pairs: usize,
}

impl Plugboard {
    /// A plugboard with no cables: every letter maps to itself.
    pub fn identity() -> Self {
        Self { map: std::array::from_fn(|i| i as u8), pairs: 0 }
    }

    /// Builds a plugboard from pair strings such as `["AB", "cd"]`.
    ///
    /// Blank strings are unset form fields and are skipped. Of the rest,
    /// only the first [`MAX_PLUG_PAIRS`] are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a used pair is malformed, plugs a letter into
    /// itself, or reuses a letter from an earlier pair.
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self, ConfigError> {
        let filled: Vec<&str> =
            pairs.iter().map(AsRef::as_ref).filter(|pair| !pair.trim().is_empty()).collect();

        let parsed = truncate(&filled)
            .iter()
            .map(|pair| PlugPair::parse(pair))
            .collect::<Result<Vec<_>, _>>()?;

        Self::connect(&parsed)
    }

    /// Builds a plugboard from already parsed pairs.
    ///
    /// Only the first [`MAX_PLUG_PAIRS`] are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlugAlreadyUsed`] if a letter appears in two
    /// used pairs.
    pub fn from_pairs(pairs: &[PlugPair]) -> Result<Self, ConfigError> {
        Self::connect(truncate(pairs))
    }

    fn connect(pairs: &[PlugPair]) -> Result<Self, ConfigError> {
        let mut board = Self::identity();
        for pair in pairs {
            for signal in [pair.a, pair.b] {
                if board.map[usize::from(signal)] != signal {
                    return Err(ConfigError::PlugAlreadyUsed {
                        letter: alphabet::letter_of(signal),
                    });
                }
            }
            board.map[usize::from(pair.a)] = pair.b;
            board.map[usize::from(pair.b)] = pair.a;
            board.pairs += 1;
        }
        Ok(board)
    }

    /// Swaps a contact signal through the board.
    pub fn swap(&self, signal: u8) -> u8 {
        self.map[usize::from(signal % LEN)]
    }

    /// Number of connected pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs
    }

    /// Connected pairs, each listed once with its lower letter first.
    pub fn pairs(&self) -> Vec<PlugPair> {
        (0..LEN)
            .filter_map(|a| {
                let b = self.map[usize::from(a)];
                (a < b).then_some(PlugPair { a, b })
            })
            .collect()
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pairs()).finish()
    }
}

fn truncate<T>(pairs: &[T]) -> &[T] {
    if pairs.len() > MAX_PLUG_PAIRS {
        warn!(
            supplied = pairs.len(),
            dropped = pairs.len() - MAX_PLUG_PAIRS,
            "plugboard holds {MAX_PLUG_PAIRS} pairs, ignoring the rest"
        );
        &pairs[..MAX_PLUG_PAIRS]
    } else {
        pairs
    }
}
