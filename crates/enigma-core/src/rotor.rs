//! Rotors: fixed wiring on a rotating body.
//!
//! The wiring is fixed relative to the rotor body, and the body turns
//! relative to the static entry contacts. Translating a signal therefore
//! shifts it into the body's frame by the current position, passes it through
//! the wiring, and shifts it back out.

use std::fmt;

use crate::{
    alphabet::{self, LEN},
    error::ConfigError,
    wiring::Wiring,
};

/// Rotor I, turnover at Q.
pub const ROTOR_I: RotorSpec = RotorSpec::from_tables(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b"Q");

/// Rotor II, turnover at E.
pub const ROTOR_II: RotorSpec = RotorSpec::from_tables(b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b"E");

/// Rotor III, turnover at V.
pub const ROTOR_III: RotorSpec = RotorSpec::from_tables(b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b"V");

/// Rotors I, II, III in left-to-right order.
pub const DEFAULT_ROTORS: [RotorSpec; 3] = [ROTOR_I, ROTOR_II, ROTOR_III];

/// Set of positions at which a rotor carries its left neighbour.
///
/// Stored as a 26-bit mask, bit `n` set for position `n`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notches(u32);

impl Notches {
    const fn from_table(letters: &[u8]) -> Self {
        let mut mask = 0u32;
        let mut i = 0;
        while i < letters.len() {
            mask |= 1 << (letters[i] - b'A');
            i += 1;
        }
        Self(mask)
    }

    /// Parses one or more notch letters, e.g. `"Q"` or `"ZM"`.
    pub fn parse(letters: &str) -> Result<Self, ConfigError> {
        let mut mask = 0u32;
        for ch in letters.chars() {
            let signal = alphabet::signal_of(ch).ok_or(ConfigError::InvalidNotchLetter { ch })?;
            mask |= 1 << signal;
        }
        if mask == 0 {
            return Err(ConfigError::EmptyNotch);
        }
        Ok(Self(mask))
    }

    /// Returns true if `position` is a notch position.
    pub fn contains(self, position: u8) -> bool {
        position < LEN && self.0 & (1 << position) != 0
    }

    /// Notch letters in alphabetical order.
    pub fn letters(self) -> String {
        (0..LEN).filter(|&p| self.contains(p)).map(alphabet::letter_of).collect()
    }
}

impl fmt::Debug for Notches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Notches").field(&self.letters()).finish()
    }
}

/// Immutable description of a rotor: its wiring and notch letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotorSpec {
    wiring: Wiring,
    notches: Notches,
}

impl RotorSpec {
    const fn from_tables(wiring: &[u8; LEN as usize], notches: &[u8]) -> Self {
        Self { wiring: Wiring::from_table(wiring), notches: Notches::from_table(notches) }
    }

    /// Builds a spec from a 26-letter wiring and one or more notch letters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the wiring is not a permutation of A-Z or
    /// the notch set is empty or contains non-letters.
    pub fn new(wiring: &str, notches: &str) -> Result<Self, ConfigError> {
        Ok(Self { wiring: Wiring::parse(wiring)?, notches: Notches::parse(notches)? })
    }

    /// The rotor's wiring.
    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// The rotor's notch positions.
    pub fn notches(&self) -> Notches {
        self.notches
    }
}

/// A rotor in a machine slot.
///
/// `position` only changes through [`Rotor::step`]; translating a signal
/// never moves the rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: RotorSpec,
    position: u8,
}

impl Rotor {
    /// Mounts `spec` at `position`, wrapped onto `0..26`.
    pub fn new(spec: RotorSpec, position: i32) -> Self {
        Self { spec, position: alphabet::wrap(position) }
    }

    /// The mounted spec.
    pub fn spec(&self) -> &RotorSpec {
        &self.spec
    }

    /// Current rotational position, `0..26`.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// The letter showing in the machine window.
    pub fn window_letter(&self) -> char {
        alphabet::letter_of(self.position)
    }

    /// Advances the rotor by one position.
    pub fn step(&mut self) {
        self.position = alphabet::shift(self.position, 1);
    }

    /// Returns true if the rotor sits at one of its notch positions.
    pub fn at_notch(&self) -> bool {
        self.spec.notches.contains(self.position)
    }

    /// Translates a signal travelling towards the reflector.
    pub fn forward(&self, signal: u8) -> u8 {
        let entry = alphabet::shift(signal, self.position);
        alphabet::unshift(self.spec.wiring.map(entry), self.position)
    }

    /// Translates a signal travelling back from the reflector.
    ///
    /// Inverse of [`Rotor::forward`] at the same position.
    pub fn backward(&self, signal: u8) -> u8 {
        let entry = alphabet::shift(signal, self.position);
        alphabet::unshift(self.spec.wiring.unmap(entry), self.position)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn default_tables_parse_to_the_same_specs() {
        assert_eq!(RotorSpec::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"), Ok(ROTOR_I));
        assert_eq!(RotorSpec::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"), Ok(ROTOR_II));
        assert_eq!(RotorSpec::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"), Ok(ROTOR_III));
    }

    #[test]
    fn notch_letters() {
        assert_eq!(ROTOR_I.notches().letters(), "Q");
        assert_eq!(Notches::parse("zm").map(Notches::letters), Ok("MZ".to_string()));
    }

    #[test]
    fn notch_parse_rejects_empty_and_non_letters() {
        assert_eq!(Notches::parse(""), Err(ConfigError::EmptyNotch));
        assert_eq!(Notches::parse("Q5"), Err(ConfigError::InvalidNotchLetter { ch: '5' }));
    }

    #[test]
    fn new_wraps_position() {
        assert_eq!(Rotor::new(ROTOR_I, 27).position(), 1);
        assert_eq!(Rotor::new(ROTOR_I, -1).position(), 25);
    }

    #[test]
    fn step_wraps_after_z() {
        let mut rotor = Rotor::new(ROTOR_I, 25);
        rotor.step();
        assert_eq!(rotor.position(), 0);
        assert_eq!(rotor.window_letter(), 'A');
    }

    #[test]
    fn at_notch_only_on_notch_letter() {
        for position in 0..i32::from(LEN) {
            let rotor = Rotor::new(ROTOR_III, position);
            assert_eq!(rotor.at_notch(), position == 21, "position {position}");
        }
    }

    #[test]
    fn at_notch_with_several_notches() {
        let spec = RotorSpec::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "AN").expect("valid spec");
        assert!(Rotor::new(spec, 0).at_notch());
        assert!(Rotor::new(spec, 13).at_notch());
        assert!(!Rotor::new(spec, 1).at_notch());
    }

    #[test]
    fn forward_at_home_position_is_the_wiring() {
        let rotor = Rotor::new(ROTOR_I, 0);
        assert_eq!(rotor.forward(0), 4); // A -> E
        assert_eq!(rotor.backward(4), 0);
    }

    #[test]
    fn forward_applies_offset_on_both_sides() {
        // Position B: A enters contact B, wired to K, leaves as J.
        let rotor = Rotor::new(ROTOR_I, 1);
        assert_eq!(rotor.forward(0), 9);
    }

    #[test]
    fn translation_does_not_move_the_rotor() {
        let rotor = Rotor::new(ROTOR_II, 7);
        let _ = rotor.forward(3);
        let _ = rotor.backward(3);
        assert_eq!(rotor.position(), 7);
    }

    proptest! {
        #[test]
        fn prop_backward_inverts_forward(position in 0i32..26, signal in 0u8..26) {
            for spec in DEFAULT_ROTORS {
                let rotor = Rotor::new(spec, position);
                prop_assert_eq!(rotor.backward(rotor.forward(signal)), signal);
                prop_assert_eq!(rotor.forward(rotor.backward(signal)), signal);
            }
        }

        #[test]
        fn prop_twenty_six_steps_return_home(start in any::<i32>()) {
            let mut rotor = Rotor::new(ROTOR_I, start);
            let home = rotor.position();
            for _ in 0..LEN {
                rotor.step();
            }
            prop_assert_eq!(rotor.position(), home);
        }
    }
}
