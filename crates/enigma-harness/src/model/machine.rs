//! Model machine - the reference implementation.

use super::{
    config::{ModelConfig, STANDARD_REFLECTOR},
    operation::{KeyResult, Operation, symbol_key},
};

/// A full-alphabet substitution table.
type Table = [u8; 26];

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Rotor positions, left to right.
    pub positions: [u8; 3],
}

/// Model machine.
///
/// Keeps the wiring as plain tables and rebuilds every rotor's table for
/// the current position on each key.
#[derive(Debug, Clone)]
pub struct ModelMachine {
    wirings: [Table; 3],
    notches: [Vec<u8>; 3],
    reflector: Table,
    plugboard: Table,
    positions: [u8; 3],
}

impl ModelMachine {
    /// Create a model from a configuration.
    ///
    /// The configuration is assumed valid (see
    /// [`ModelConfig::to_machine_config`]); the model does no validation of
    /// its own.
    pub fn new(config: &ModelConfig) -> Self {
        let wirings = config.rotors.each_ref().map(|(wiring, _)| table_from_letters(wiring));
        let notches: [Vec<u8>; 3] =
            config.rotors.each_ref().map(|(_, notches)| letters(notches).collect());
        let positions = config.positions.map(|p| p.rem_euclid(26) as u8);

        // Unset fields are skipped, then at most three cables are plugged.
        let mut plugboard: Table = std::array::from_fn(|i| i as u8);
        for pair in config.plug_pairs.iter().filter(|p| !p.trim().is_empty()).take(3) {
            let ends: Vec<u8> = letters(pair.trim()).collect();
            if let [a, b] = ends[..] {
                plugboard[a as usize] = b;
                plugboard[b as usize] = a;
            }
        }

        Self {
            wirings,
            notches,
            reflector: table_from_letters(STANDARD_REFLECTOR),
            plugboard,
            positions,
        }
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> KeyResult {
        match op {
            Operation::PressLetter { letter } => {
                KeyResult::Key(self.press(char::from(b'A' + letter % 26)))
            },
            Operation::PressLowercase { letter } => {
                KeyResult::Key(self.press(char::from(b'a' + letter % 26)))
            },
            Operation::PressSymbol { symbol } => KeyResult::Key(self.press(symbol_key(*symbol))),
            Operation::EncodeText { content } => {
                let text = content.to_text().to_uppercase();
                KeyResult::Text(text.chars().map(|key| self.press(key)).collect())
            },
        }
    }

    /// Press one key.
    pub fn press(&mut self, key: char) -> char {
        if !key.is_ascii_alphabetic() {
            return key;
        }

        self.positions = self.next_positions();
        let signal = key.to_ascii_uppercase() as u8 - b'A';
        char::from(b'A' + self.substitution()[signal as usize])
    }

    /// Rotor positions, left to right.
    pub fn positions(&self) -> [u8; 3] {
        self.positions
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState { positions: self.positions }
    }

    /// Positions after one keypress.
    ///
    /// Both notch checks read the old positions. When the middle and right
    /// rotors both sit on a notch the middle rotor is pushed by both and
    /// moves two places.
    fn next_positions(&self) -> [u8; 3] {
        let [left, middle, right] = self.positions;
        let middle_turns = self.notches[1].contains(&middle);
        let right_turns = self.notches[2].contains(&right);

        [
            (left + u8::from(middle_turns)) % 26,
            (middle + u8::from(middle_turns) + u8::from(right_turns)) % 26,
            (right + 1) % 26,
        ]
    }

    /// Whole-machine substitution at the current positions.
    fn substitution(&self) -> Table {
        let right = self.rotor_table(2);
        let middle = self.rotor_table(1);
        let left = self.rotor_table(0);

        let path = [
            self.plugboard,
            right,
            middle,
            left,
            self.reflector,
            invert(&left),
            invert(&middle),
            invert(&right),
            self.plugboard,
        ];

        std::array::from_fn(|i| path.iter().fold(i as u8, |signal, table| table[signal as usize]))
    }

    /// A rotor's wiring seen from the static contacts at its position.
    fn rotor_table(&self, slot: usize) -> Table {
        let p = self.positions[slot] as usize;
        let wiring = &self.wirings[slot];
        std::array::from_fn(|i| ((wiring[(i + p) % 26] as usize + 26 - p) % 26) as u8)
    }
}

fn letters(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.bytes().map(|b| b.to_ascii_uppercase().wrapping_sub(b'A') % 26)
}

fn table_from_letters(text: &str) -> Table {
    let mut table = [0u8; 26];
    for (slot, signal) in table.iter_mut().zip(letters(text)) {
        *slot = signal;
    }
    table
}

fn invert(table: &Table) -> Table {
    let mut inverse = [0u8; 26];
    for (i, &out) in table.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}
