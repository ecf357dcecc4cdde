//! Model-based property tests.
//!
//! These tests generate random operation sequences and verify that the real
//! machine behaves identically to the reference model.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: (seed, Vec<Operation>)
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!     ModelMachine    RealMachine      Compare
//!     (reference)     (Session)        Results
//! ```

use enigma_core::Session;
use enigma_harness::{
    KeyResult, ModelConfig, ModelMachine, ObservableState, Operation, SmallText, symbol_key,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Real machine wrapper that mirrors `ModelMachine`'s interface.
struct RealMachine {
    session: Session,
}

impl RealMachine {
    fn new(config: &ModelConfig) -> Self {
        let machine_config = config.to_machine_config().expect("model configs are valid");
        let session = Session::new(&machine_config).expect("model configs are valid");
        Self { session }
    }

    fn apply(&mut self, op: &Operation) -> KeyResult {
        match op {
            Operation::PressLetter { letter } => {
                KeyResult::Key(self.session.press(char::from(b'A' + letter % 26)))
            },
            Operation::PressLowercase { letter } => {
                KeyResult::Key(self.session.press(char::from(b'a' + letter % 26)))
            },
            Operation::PressSymbol { symbol } => {
                KeyResult::Key(self.session.press(symbol_key(*symbol)))
            },
            Operation::EncodeText { content } => {
                KeyResult::Text(self.session.type_text(&content.to_text()))
            },
        }
    }

    fn observable_state(&self) -> ObservableState {
        ObservableState { positions: self.session.positions() }
    }
}

fn config_for(seed: u64) -> ModelConfig {
    ModelConfig::random(&mut ChaCha8Rng::seed_from_u64(seed))
}

/// Strategy for generating `SmallText`.
fn small_text_strategy() -> impl Strategy<Value = SmallText> {
    (any::<u8>(), any::<u8>()).prop_map(|(seed, len)| SmallText { seed, len })
}

/// Strategy for generating operations.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        // Weight towards single letters so the rotors turn over often
        6 => any::<u8>().prop_map(|letter| Operation::PressLetter { letter }),
        2 => any::<u8>().prop_map(|letter| Operation::PressLowercase { letter }),
        1 => any::<u8>().prop_map(|symbol| Operation::PressSymbol { symbol }),
        2 => small_text_strategy().prop_map(|content| Operation::EncodeText { content }),
    ]
}

proptest! {
    /// Verify that lamps and rotor positions match between model and real
    /// machine after every operation.
    #[test]
    fn prop_model_matches_real(
        seed in any::<u64>(),
        ops in prop::collection::vec(operation_strategy(), 0..200)
    ) {
        let config = config_for(seed);
        let mut model = ModelMachine::new(&config);
        let mut real = RealMachine::new(&config);

        for (i, op) in ops.iter().enumerate() {
            let model_result = model.apply(op);
            let real_result = real.apply(op);

            prop_assert_eq!(
                &model_result,
                &real_result,
                "Divergence at operation {}: {:?}\nConfig: {:?}",
                i, op, config
            );
            prop_assert_eq!(
                model.observable_state(),
                real.observable_state(),
                "State divergence at operation {}: {:?}",
                i, op
            );
        }
    }

    /// Verify the transcript decodes back to what was typed.
    #[test]
    fn prop_transcript_decodes(
        seed in any::<u64>(),
        ops in prop::collection::vec(operation_strategy(), 0..100)
    ) {
        let mut real = RealMachine::new(&config_for(seed));
        for op in &ops {
            let _ = real.apply(op);
        }

        prop_assert_eq!(real.session.decode(), real.session.input().to_ascii_uppercase());
    }

    /// Verify symbols never move the rotors.
    #[test]
    fn prop_symbols_do_not_step(
        seed in any::<u64>(),
        symbols in prop::collection::vec(any::<u8>(), 0..50)
    ) {
        let config = config_for(seed);
        let mut model = ModelMachine::new(&config);
        let before = model.observable_state();

        for symbol in symbols {
            let _ = model.apply(&Operation::PressSymbol { symbol });
        }

        prop_assert_eq!(model.observable_state(), before);
    }
}

#[cfg(test)]
mod smoke_tests {
    use super::*;

    /// Basic smoke test for the model against the standard machine.
    #[test]
    fn model_basic_operations() {
        let config = ModelConfig::standard();
        let mut model = ModelMachine::new(&config);
        let mut real = RealMachine::new(&config);

        for op in [
            Operation::PressLetter { letter: 0 },
            Operation::PressLowercase { letter: 26 },
            Operation::PressSymbol { symbol: 0 },
            Operation::EncodeText { content: SmallText { seed: 3, len: 12 } },
        ] {
            assert_eq!(model.apply(&op), real.apply(&op));
        }
        assert_eq!(model.observable_state(), real.observable_state());
    }

    /// The first two keys from `AAA` light B then D.
    #[test]
    fn known_keys() {
        let mut model = ModelMachine::new(&ModelConfig::standard());
        assert_eq!(model.apply(&Operation::PressLetter { letter: 0 }), KeyResult::Key('B'));
        assert_eq!(model.apply(&Operation::PressLowercase { letter: 0 }), KeyResult::Key('D'));
        assert_eq!(model.positions(), [0, 0, 2]);
    }
}
