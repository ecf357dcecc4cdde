//! Configuration error types.

use thiserror::Error;

/// Errors from building a machine or one of its parts.
///
/// These are only ever produced at construction time. Encoding itself cannot
/// fail: non-letters pass through and positions wrap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotor wiring does not have exactly 26 letters.
    #[error("rotor wiring must have 26 letters, got {len}")]
    WiringLength {
        /// Number of characters supplied.
        len: usize,
    },

    /// Rotor wiring contains a character outside A-Z.
    #[error("rotor wiring contains non-letter {ch:?}")]
    InvalidWiringLetter {
        /// The offending character.
        ch: char,
    },

    /// Rotor wiring maps two contacts to the same letter.
    #[error("rotor wiring uses {letter} more than once")]
    DuplicateWiringLetter {
        /// The repeated letter (uppercase).
        letter: char,
    },

    /// Rotor spec has no notch letters.
    #[error("rotor needs at least one notch letter")]
    EmptyNotch,

    /// Notch set contains a character outside A-Z.
    #[error("notch contains non-letter {ch:?}")]
    InvalidNotchLetter {
        /// The offending character.
        ch: char,
    },

    /// Plug pair is not made of exactly two characters.
    #[error("plug pair must be two letters, got {pair:?}")]
    MalformedPlugPair {
        /// The pair as supplied.
        pair: String,
    },

    /// Plug pair contains a character outside A-Z.
    #[error("plug pair contains non-letter {ch:?}")]
    InvalidPlugLetter {
        /// The offending character.
        ch: char,
    },

    /// Plug pair connects a letter to itself.
    #[error("cannot plug {letter} into itself")]
    SelfPlug {
        /// The letter (uppercase).
        letter: char,
    },

    /// Letter is already connected by an earlier pair.
    #[error("letter {letter} is already plugged")]
    PlugAlreadyUsed {
        /// The letter (uppercase).
        letter: char,
    },
}

impl ConfigError {
    /// Returns true if the error came from the plug pair list.
    ///
    /// Lets a front end point at the plugboard form rather than the rotor
    /// settings.
    pub fn is_plugboard(&self) -> bool {
        match self {
            Self::MalformedPlugPair { .. }
            | Self::InvalidPlugLetter { .. }
            | Self::SelfPlug { .. }
            | Self::PlugAlreadyUsed { .. } => true,

            Self::WiringLength { .. }
            | Self::InvalidWiringLetter { .. }
            | Self::DuplicateWiringLetter { .. }
            | Self::EmptyNotch
            | Self::InvalidNotchLetter { .. } => false,
        }
    }
}
