//! Plain-string configuration shared by the model and the real machine.

use enigma_core::{ConfigError, MachineConfig, RotorSpec};
use rand::{Rng, seq::SliceRandom};

/// Rotors I, II, III as `(wiring, notches)`.
pub const STANDARD_ROTORS: [(&str, &str); 3] = [
    ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
];

/// Reflector B.
pub const STANDARD_REFLECTOR: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Machine configuration as plain strings.
///
/// The model reads these directly; the real machine gets them through
/// [`ModelConfig::to_machine_config`], so both sides start from the same
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// `(wiring, notches)` per slot, left to right.
    pub rotors: [(String, String); 3],
    /// Initial positions, left to right, not yet wrapped.
    pub positions: [i32; 3],
    /// Plug pair strings.
    pub plug_pairs: Vec<String>,
}

impl ModelConfig {
    /// Rotors I, II, III at `AAA` with no plugs.
    pub fn standard() -> Self {
        Self {
            rotors: STANDARD_ROTORS
                .map(|(wiring, notches)| (wiring.to_string(), notches.to_string())),
            positions: [0; 3],
            plug_pairs: Vec::new(),
        }
    }

    /// A random valid configuration.
    ///
    /// Each slot gets a standard rotor or a shuffled wiring with one or two
    /// notches. Positions range over several turns in both directions, and
    /// up to five disjoint plug pairs are drawn so truncation is exercised.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rotors = std::array::from_fn(|_| random_rotor(&mut *rng));
        let positions = std::array::from_fn(|_| rng.gen_range(-52..52));

        let mut letters = *ALPHABET;
        letters.shuffle(rng);
        let count = rng.gen_range(0..=5);
        let plug_pairs = letters
            .chunks(2)
            .take(count)
            .map(|pair| pair.iter().copied().map(char::from).collect())
            .collect();

        Self { rotors, positions, plug_pairs }
    }

    /// Builds the equivalent [`MachineConfig`].
    pub fn to_machine_config(&self) -> Result<MachineConfig, ConfigError> {
        let [left, middle, right] = &self.rotors;
        let rotors = [
            RotorSpec::new(&left.0, &left.1)?,
            RotorSpec::new(&middle.0, &middle.1)?,
            RotorSpec::new(&right.0, &right.1)?,
        ];

        Ok(MachineConfig::default()
            .with_rotors(rotors)
            .with_positions(self.positions)
            .with_plug_pairs(self.plug_pairs.iter().cloned()))
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn random_rotor<R: Rng + ?Sized>(rng: &mut R) -> (String, String) {
    if rng.gen_bool(0.5) {
        let (wiring, notches) = STANDARD_ROTORS[rng.gen_range(0..STANDARD_ROTORS.len())];
        return (wiring.to_string(), notches.to_string());
    }

    let mut wiring = *ALPHABET;
    wiring.shuffle(rng);
    let notch_count = rng.gen_range(1..=2);
    let notches = (0..notch_count).map(|_| char::from(ALPHABET[rng.gen_range(0..26)])).collect();

    (wiring.iter().copied().map(char::from).collect(), notches)
}
