//! The machine: stepping state machine plus encode pipeline.
//!
//! # Stepping
//!
//! Before each letter is translated, with both notch checks taken against
//! the positions as they stood before this keypress:
//!
//! 1. middle rotor at its notch: step the middle and the left rotor
//! 2. right rotor at its notch: step the middle rotor
//! 3. step the right rotor
//!
//! Rule 1 is the double step: the middle rotor, carried onto its notch by
//! the right rotor, moves again on the very next keypress.
//!
//! # Invariants
//!
//! - Rotor positions change only on alphabetic input, exactly once per
//!   letter, before translation.
//! - The plugboard and reflector never change after construction.
//! - Two machines built from the same configuration go through the same
//!   position sequence for the same input, and are mutual inverses over
//!   alphabetic text.

use tracing::{debug, trace};

use crate::{
    alphabet::{self, LEN},
    config::MachineConfig,
    error::ConfigError,
    plugboard::Plugboard,
    reflector::{REFLECTOR_B, Reflector},
    rotor::{DEFAULT_ROTORS, Rotor, RotorSpec},
};

/// Number of rotor slots.
pub const ROTOR_COUNT: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// A configured three-rotor machine.
///
/// Encoding takes `&mut self`: the rotor positions are the machine's state,
/// and the order of keypresses determines the output. Share a machine across
/// threads by moving it, not by aliasing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Left to right.
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Builds a machine from rotor specs (left to right), initial positions,
    /// and plug pair strings.
    ///
    /// Positions wrap modulo 26. Blank plug pairs are skipped and pairs
    /// beyond [`crate::MAX_PLUG_PAIRS`] are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a plug pair is malformed or reuses a letter.
    pub fn new<S: AsRef<str>>(
        rotor_specs: [RotorSpec; ROTOR_COUNT],
        positions: [i32; ROTOR_COUNT],
        plug_pairs: &[S],
    ) -> Result<Self, ConfigError> {
        let plugboard = Plugboard::new(plug_pairs)?;
        Ok(Self::with_plugboard(rotor_specs, positions, plugboard))
    }

    /// Builds a machine from a [`MachineConfig`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the plug pairs are invalid.
    pub fn from_config(config: &MachineConfig) -> Result<Self, ConfigError> {
        Self::new(config.rotors, config.positions, &config.plug_pairs)
    }

    /// Builds a machine around an already validated plugboard.
    pub fn with_plugboard(
        rotor_specs: [RotorSpec; ROTOR_COUNT],
        positions: [i32; ROTOR_COUNT],
        plugboard: Plugboard,
    ) -> Self {
        let [left, middle, right] = rotor_specs;
        let rotors = [
            Rotor::new(left, positions[LEFT]),
            Rotor::new(middle, positions[MIDDLE]),
            Rotor::new(right, positions[RIGHT]),
        ];
        let machine = Self { rotors, reflector: REFLECTOR_B, plugboard };

        debug!(window = %machine.window(), plug_pairs = plugboard.pair_count(), "machine ready");
        machine
    }

    /// Rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Current rotor positions, left to right.
    pub fn positions(&self) -> [u8; ROTOR_COUNT] {
        self.rotors.each_ref().map(Rotor::position)
    }

    /// Current rotor positions as window letters, e.g. `"ADV"`.
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window_letter).collect()
    }

    /// Encodes one key.
    ///
    /// Letters of either case step the rotors and come back as an uppercase
    /// letter. Anything else is returned unchanged and does not step.
    pub fn encode_char(&mut self, ch: char) -> char {
        let Some(signal) = alphabet::signal_of(ch) else {
            return ch;
        };

        self.step_rotors();
        alphabet::letter_of(self.translate(signal))
    }

    /// Upper-cases `text`, then encodes it one character at a time, in order.
    pub fn encode_text(&mut self, text: &str) -> String {
        text.to_uppercase().chars().map(|ch| self.encode_char(ch)).collect()
    }

    /// The substitution the rotors would apply at their current positions,
    /// without stepping: entry `i` is the lamp lit by contact `i`.
    ///
    /// The next key sees this table only after the rotors step.
    pub fn substitution(&self) -> [u8; LEN as usize] {
        std::array::from_fn(|signal| self.translate(signal as u8))
    }

    fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();

        if middle_at_notch {
            self.rotors[MIDDLE].step();
            self.rotors[LEFT].step();
        }
        if right_at_notch {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();

        if middle_at_notch || right_at_notch {
            trace!(middle_at_notch, right_at_notch, window = %self.window(), "turnover");
        }
    }

    fn translate(&self, signal: u8) -> u8 {
        let entry = self.plugboard.swap(signal);
        let outbound = self.rotors.iter().rev().fold(entry, |s, rotor| rotor.forward(s));
        let reflected = self.reflector.reflect(outbound);
        let inbound = self.rotors.iter().fold(reflected, |s, rotor| rotor.backward(s));
        self.plugboard.swap(inbound)
    }
}

impl Default for Machine {
    /// Rotors I, II, III at `AAA`, no plugs.
    fn default() -> Self {
        Self::with_plugboard(DEFAULT_ROTORS, [0; ROTOR_COUNT], Plugboard::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(positions: [i32; 3], plugs: &[&str]) -> Machine {
        Machine::new(DEFAULT_ROTORS, positions, plugs).expect("valid configuration")
    }

    #[test]
    fn default_machine_starts_at_aaa() {
        let machine = Machine::default();
        assert_eq!(machine.positions(), [0, 0, 0]);
        assert_eq!(machine.window(), "AAA");
        assert_eq!(machine.plugboard().pair_count(), 0);
    }

    #[test]
    fn positions_wrap_at_construction() {
        let machine = machine([26, -1, 53], &[]);
        assert_eq!(machine.positions(), [0, 25, 1]);
    }

    #[test]
    fn invalid_plugs_prevent_construction() {
        let result = Machine::new(DEFAULT_ROTORS, [0, 0, 0], &["AA"]);
        assert_eq!(result, Err(ConfigError::SelfPlug { letter: 'A' }));
    }

    #[test]
    fn right_rotor_steps_every_letter() {
        let mut machine = Machine::default();
        machine.encode_char('A');
        assert_eq!(machine.positions(), [0, 0, 1]);
        machine.encode_char('A');
        assert_eq!(machine.positions(), [0, 0, 2]);
    }

    #[test]
    fn stepping_happens_before_translation() {
        // Translating A at AAB (the post-step state) must match the output.
        let mut machine = Machine::default();
        let stepped = machine.clone();
        let out = machine.encode_char('A');

        let mut expected = stepped;
        expected.step_rotors();
        assert_eq!(alphabet::letter_of(expected.substitution()[0]), out);
    }

    #[test]
    fn right_notch_carries_middle() {
        // Right rotor (III) at V.
        let mut machine = machine([0, 0, 21], &[]);
        machine.encode_char('X');
        assert_eq!(machine.positions(), [0, 1, 22]);
    }

    #[test]
    fn double_step() {
        // ADU -> ADV -> AEW -> BFX
        let mut machine = machine([0, 3, 20], &[]);
        machine.encode_char('A');
        assert_eq!(machine.window(), "ADV");
        machine.encode_char('A');
        assert_eq!(machine.window(), "AEW");
        machine.encode_char('A');
        assert_eq!(machine.window(), "BFX");
        machine.encode_char('A');
        assert_eq!(machine.window(), "BFY");
    }

    #[test]
    fn both_notches_step_middle_twice() {
        // Rules 1 and 2 both fire off the pre-step positions.
        let mut machine = machine([0, 4, 21], &[]);
        machine.encode_char('A');
        assert_eq!(machine.positions(), [1, 6, 22]);
    }

    #[test]
    fn non_letters_pass_through_without_stepping() {
        let mut machine = Machine::default();
        for ch in [' ', '7', '.', 'é', '\n'] {
            assert_eq!(machine.encode_char(ch), ch);
        }
        assert_eq!(machine.positions(), [0, 0, 0]);
    }

    #[test]
    fn lowercase_letters_encode_as_uppercase() {
        let mut lower = Machine::default();
        let mut upper = Machine::default();
        assert_eq!(lower.encode_char('a'), upper.encode_char('A'));
        assert_eq!(lower.positions(), upper.positions());
    }

    #[test]
    fn encode_text_uppercases_first() {
        let mut machine = Machine::default();
        assert_eq!(machine.encode_text("aaaaa"), "BDZGO");
    }

    #[test]
    fn no_letter_encodes_to_itself() {
        let mut machine = machine([5, 9, 14], &["AB", "CD", "EF"]);
        for _ in 0..200 {
            let table = machine.substitution();
            for (signal, &lamp) in table.iter().enumerate() {
                assert_ne!(usize::from(lamp), signal);
            }
            machine.encode_char('Q');
        }
    }

    #[test]
    fn substitution_is_an_involution_at_every_position() {
        let mut machine = machine([0, 3, 20], &["QW", "ER"]);
        for _ in 0..100 {
            let table = machine.substitution();
            for signal in 0..LEN {
                assert_eq!(table[usize::from(table[usize::from(signal)])], signal);
            }
            machine.encode_char('Z');
        }
    }

    #[test]
    fn reconfiguring_rotor_order_changes_output() {
        let mut standard = Machine::default();
        let mut swapped = Machine::new(
            [crate::ROTOR_III, crate::ROTOR_II, crate::ROTOR_I],
            [0, 0, 0],
            &[] as &[&str],
        )
        .expect("valid configuration");
        assert_ne!(standard.encode_text("HELLOWORLD"), swapped.encode_text("HELLOWORLD"));
    }
}
