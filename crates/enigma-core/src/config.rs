//! Machine configuration.

use crate::{
    machine::ROTOR_COUNT,
    rotor::{DEFAULT_ROTORS, RotorSpec},
};

/// Everything needed to build a [`crate::Machine`].
///
/// Two machines built from equal configurations encode identically, which
/// is what makes decoding possible: the receiver rebuilds the sender's
/// configuration and types the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor specs, left to right.
    pub rotors: [RotorSpec; ROTOR_COUNT],
    /// Initial positions, left to right. Wrapped modulo 26 when the machine
    /// is built.
    pub positions: [i32; ROTOR_COUNT],
    /// Plug pair strings such as `"AB"`. Validated when the machine is built.
    pub plug_pairs: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self { rotors: DEFAULT_ROTORS, positions: [0; ROTOR_COUNT], plug_pairs: Vec::new() }
    }
}

impl MachineConfig {
    /// Replaces the rotor specs.
    #[must_use]
    pub fn with_rotors(mut self, rotors: [RotorSpec; ROTOR_COUNT]) -> Self {
        self.rotors = rotors;
        self
    }

    /// Replaces the initial positions.
    #[must_use]
    pub fn with_positions(mut self, positions: [i32; ROTOR_COUNT]) -> Self {
        self.positions = positions;
        self
    }

    /// Replaces the plug pairs.
    #[must_use]
    pub fn with_plug_pairs<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plug_pairs = pairs.into_iter().map(Into::into).collect();
        self
    }
}
