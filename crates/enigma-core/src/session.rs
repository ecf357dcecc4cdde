//! Operator session.
//!
//! A `Session` is what a front end holds while someone types at the machine:
//! the live machine, a copy of it as it stood when the transcript began, and
//! the typed and lit letters so far. Decoding replays the lit letters through
//! the copy.
//!
//! Changing the rotor positions or plugs rebuilds the machine and starts a
//! new transcript, so a transcript always belongs to exactly one starting
//! configuration.

use tracing::debug;

use crate::{
    config::MachineConfig,
    error::ConfigError,
    machine::{Machine, ROTOR_COUNT},
    plugboard::Plugboard,
};

/// One operator's transcript over a live machine.
#[derive(Debug, Clone)]
pub struct Session {
    machine: Machine,
    /// Machine as it stood when the transcript began.
    initial: Machine,
    input: String,
    output: String,
}

impl Session {
    /// Starts a session with an empty transcript.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot build a machine.
    pub fn new(config: &MachineConfig) -> Result<Self, ConfigError> {
        let machine = Machine::from_config(config)?;
        Ok(Self::from_machine(machine))
    }

    /// Starts a session on an existing machine at its current positions.
    pub fn from_machine(machine: Machine) -> Self {
        Self { initial: machine.clone(), machine, input: String::new(), output: String::new() }
    }

    /// Presses one key and returns the lit letter (or the key itself if it
    /// is not a letter).
    pub fn press(&mut self, key: char) -> char {
        let lit = self.machine.encode_char(key);
        self.input.push(key);
        self.output.push(lit);
        lit
    }

    /// Upper-cases `text` and presses each character in order.
    pub fn type_text(&mut self, text: &str) -> String {
        text.to_uppercase().chars().map(|key| self.press(key)).collect()
    }

    /// Keys pressed since the transcript began.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Letters lit since the transcript began.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The live machine.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Live rotor positions.
    pub fn positions(&self) -> [u8; ROTOR_COUNT] {
        self.machine.positions()
    }

    /// Live window letters.
    pub fn window(&self) -> String {
        self.machine.window()
    }

    /// Positions the transcript started from.
    pub fn initial_positions(&self) -> [u8; ROTOR_COUNT] {
        self.initial.positions()
    }

    /// Recovers the typed text by running the output through a fresh copy
    /// of the starting machine. The live machine is not touched.
    pub fn decode(&self) -> String {
        self.initial.clone().encode_text(&self.output)
    }

    /// Empties the transcript. The live positions become the new starting
    /// positions.
    pub fn clear(&mut self) {
        debug!(window = %self.machine.window(), typed = self.input.len(), "transcript cleared");
        self.initial = self.machine.clone();
        self.input.clear();
        self.output.clear();
    }

    /// Moves the rotors to `positions` and starts a new transcript.
    pub fn set_positions(&mut self, positions: [i32; ROTOR_COUNT]) {
        let plugboard = *self.machine.plugboard();
        self.rebuild(positions, plugboard);
    }

    /// Rewires the plugboard and starts a new transcript at the live
    /// positions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the pairs are invalid; the session is then
    /// left unchanged.
    pub fn set_plug_pairs<S: AsRef<str>>(&mut self, pairs: &[S]) -> Result<(), ConfigError> {
        let plugboard = Plugboard::new(pairs)?;
        let positions = self.machine.positions().map(i32::from);
        self.rebuild(positions, plugboard);
        Ok(())
    }

    fn rebuild(&mut self, positions: [i32; ROTOR_COUNT], plugboard: Plugboard) {
        let specs = self.machine.rotors().each_ref().map(|rotor| *rotor.spec());
        self.machine = Machine::with_plugboard(specs, positions, plugboard);
        self.initial = self.machine.clone();
        self.input.clear();
        self.output.clear();
    }
}
