//! Reference model for model-based testing.
//!
//! The model captures what the machine does without sharing any of its
//! code: rotor translation is a table rebuilt for every position, the return
//! path is the inverted table, and stepping is a pure function of the
//! previous positions.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Independence: wiring tables and arithmetic are its own
//! - Deterministic: same inputs produce same outputs

mod config;
mod machine;
pub mod operation;

pub use config::{ModelConfig, STANDARD_REFLECTOR, STANDARD_ROTORS};
pub use machine::{ModelMachine, ObservableState};
pub use operation::{KeyResult, Operation, SYMBOLS, SmallText, symbol_key};
