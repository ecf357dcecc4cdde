//! Seeded end-to-end scenarios.
//!
//! A scenario draws a configuration and a plaintext from a seed, encodes the
//! plaintext on a real machine while checking every key against the model,
//! and decodes the ciphertext on a second machine built from the same
//! configuration.
//!
//! # Invariants checked on every run
//!
//! - Every lamp matches the model
//! - Rotor positions match the model after every key
//!
//! Anything else belongs in an [`Oracle`].

use enigma_core::{ConfigError, Machine};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use crate::model::{ModelConfig, ModelMachine, SYMBOLS};

/// Check run against the outcome of a successful scenario.
pub type Oracle = Box<dyn Fn(&ScenarioOutcome) -> Result<(), String>>;

/// Everything a scenario produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// Seed the run was derived from.
    pub seed: u64,
    /// Configuration drawn from the seed.
    pub config: ModelConfig,
    /// Text typed on the sending machine.
    pub plaintext: String,
    /// Output of the sending machine.
    pub ciphertext: String,
    /// Output of a fresh machine fed the ciphertext.
    pub decoded: String,
    /// Rotor positions after each key of the plaintext.
    pub trajectory: Vec<[u8; 3]>,
}

/// Scenario failures.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The drawn configuration was rejected.
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    /// Real machine lit a different lamp than the model.
    #[error("key {index}: model lit {expected:?}, machine lit {actual:?}")]
    KeyDivergence {
        /// Position in the plaintext.
        index: usize,
        /// Model output.
        expected: char,
        /// Machine output.
        actual: char,
    },

    /// Real machine's rotors ended up somewhere else than the model's.
    #[error("key {index}: model at {expected:?}, machine at {actual:?}")]
    PositionDivergence {
        /// Position in the plaintext.
        index: usize,
        /// Model positions.
        expected: [u8; 3],
        /// Machine positions.
        actual: [u8; 3],
    },

    /// Oracle rejected the outcome.
    #[error("oracle failed: {0}")]
    Oracle(String),
}

/// Builder for a seeded scenario.
pub struct Scenario {
    seed: u64,
    message_len: usize,
    symbols: bool,
    oracle: Option<Oracle>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    /// Scenario with seed 0, a 64-key message of letters only.
    pub fn new() -> Self {
        Self { seed: 0, message_len: 64, symbols: false, oracle: None }
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the plaintext length in keys.
    #[must_use]
    pub fn with_message_len(mut self, message_len: usize) -> Self {
        self.message_len = message_len;
        self
    }

    /// Mix spaces, digits and punctuation into the plaintext.
    #[must_use]
    pub fn with_symbols(mut self, symbols: bool) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set the oracle.
    #[must_use]
    pub fn oracle(mut self, oracle: Oracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Run the scenario.
    pub fn run(self) -> Result<ScenarioOutcome, ScenarioError> {
        debug!(seed = self.seed, message_len = self.message_len, "running scenario");

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let config = ModelConfig::random(&mut rng);
        let plaintext = random_text(&mut rng, self.message_len, self.symbols);

        let machine_config = config.to_machine_config()?;
        let mut sender = Machine::from_config(&machine_config)?;
        let mut model = ModelMachine::new(&config);

        let mut ciphertext = String::with_capacity(plaintext.len());
        let mut trajectory = Vec::with_capacity(plaintext.len());
        for (index, key) in plaintext.chars().enumerate() {
            let actual = sender.encode_char(key);
            let expected = model.press(key);
            if actual != expected {
                return Err(ScenarioError::KeyDivergence { index, expected, actual });
            }
            if sender.positions() != model.positions() {
                return Err(ScenarioError::PositionDivergence {
                    index,
                    expected: model.positions(),
                    actual: sender.positions(),
                });
            }
            ciphertext.push(actual);
            trajectory.push(sender.positions());
        }

        let decoded = Machine::from_config(&machine_config)?.encode_text(&ciphertext);

        let outcome =
            ScenarioOutcome { seed: self.seed, config, plaintext, ciphertext, decoded, trajectory };

        if let Some(oracle) = &self.oracle {
            oracle(&outcome).map_err(ScenarioError::Oracle)?;
        }

        Ok(outcome)
    }
}

/// Uppercase plaintext, with roughly one key in six a symbol if enabled.
fn random_text(rng: &mut ChaCha8Rng, len: usize, symbols: bool) -> String {
    let symbol_keys = SYMBOLS.as_bytes();
    (0..len)
        .map(|_| {
            if symbols && rng.gen_ratio(1, 6) {
                char::from(symbol_keys[rng.gen_range(0..symbol_keys.len())])
            } else {
                char::from(b'A' + rng.gen_range(0..26u8))
            }
        })
        .collect()
}
