//! Alphabet permutations.

use std::fmt;

use crate::{
    alphabet::{self, LEN},
    error::ConfigError,
};

/// Marker for an inverse slot not yet filled while parsing.
const UNSET: u8 = u8::MAX;

/// A permutation of the 26 contacts, stored together with its inverse so
/// both directions are a single table lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [u8; LEN as usize],
    inverse: [u8; LEN as usize],
}

impl Wiring {
    /// The identity permutation.
    pub const IDENTITY: Self = Self::from_table(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// Builds a wiring from a compile-time letter table.
    ///
    /// The table must be a permutation of `A..=Z`. A non-letter fails
    /// const evaluation; a duplicate is caught by the tests of each table.
    pub(crate) const fn from_table(table: &[u8; LEN as usize]) -> Self {
        let mut forward = [0u8; LEN as usize];
        let mut inverse = [0u8; LEN as usize];
        let mut contact = 0;
        while contact < LEN as usize {
            let signal = table[contact] - b'A';
            forward[contact] = signal;
            inverse[signal as usize] = contact as u8;
            contact += 1;
        }
        Self { forward, inverse }
    }

    /// Parses a 26-letter permutation such as `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`.
    ///
    /// Letters are case-insensitive.
    pub fn parse(letters: &str) -> Result<Self, ConfigError> {
        let len = letters.chars().count();
        if len != usize::from(LEN) {
            return Err(ConfigError::WiringLength { len });
        }

        let mut forward = [0u8; LEN as usize];
        let mut inverse = [UNSET; LEN as usize];
        for (contact, ch) in (0u8..).zip(letters.chars()) {
            let signal = alphabet::signal_of(ch).ok_or(ConfigError::InvalidWiringLetter { ch })?;
            if inverse[usize::from(signal)] != UNSET {
                return Err(ConfigError::DuplicateWiringLetter {
                    letter: alphabet::letter_of(signal),
                });
            }
            forward[usize::from(contact)] = signal;
            inverse[usize::from(signal)] = contact;
        }

        // 26 distinct letters over 26 contacts: every inverse slot is filled.
        Ok(Self { forward, inverse })
    }

    /// Contact reached by entering at `signal`.
    pub fn map(&self, signal: u8) -> u8 {
        self.forward[usize::from(signal % LEN)]
    }

    /// Contact that `map` sends to `signal`.
    pub fn unmap(&self, signal: u8) -> u8 {
        self.inverse[usize::from(signal % LEN)]
    }

    /// Returns true if applying the wiring twice is the identity.
    pub fn is_involution(&self) -> bool {
        (0..LEN).all(|signal| self.map(self.map(signal)) == signal)
    }

    /// Returns true if some contact is wired to itself.
    pub fn has_fixed_point(&self) -> bool {
        (0..LEN).any(|signal| self.map(signal) == signal)
    }

    /// The wiring as its 26-letter string.
    pub fn letters(&self) -> String {
        self.forward.iter().map(|&signal| alphabet::letter_of(signal)).collect()
    }
}

impl fmt::Debug for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wiring").field(&self.letters()).finish()
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}
