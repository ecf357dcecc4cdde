//! Deterministic test harness for the Enigma machine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation built from explicit
//! permutation tables. Operations are applied to both the model and the real
//! [`enigma_core::Machine`], and their outputs and rotor positions are
//! compared after every step.
//!
//! # Scenarios
//!
//! [`Scenario`] derives a configuration and a plaintext from a seed, encodes
//! it on the real machine while checking against the model, decodes it on a
//! fresh machine, and hands the outcome to an optional oracle. The same seed
//! always produces the same run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod scenario;

pub use model::{
    KeyResult, ModelConfig, ModelMachine, ObservableState, Operation, SYMBOLS, SmallText,
    symbol_key,
};
pub use scenario::{Oracle, Scenario, ScenarioError, ScenarioOutcome};
