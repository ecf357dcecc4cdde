//! Enigma Core
//!
//! A three-rotor cipher machine: plugboard, rotor stack, and reflector
//! composed into a substitution pipeline that is its own inverse when both
//! ends share the same configuration.
//!
//! # Architecture
//!
//! ```text
//! key ─► Plugboard ─► Rotor[2] ─► Rotor[1] ─► Rotor[0] ─┐
//!                                                      Reflector
//! lamp ◄─ Plugboard ◄─ Rotor[2] ◄─ Rotor[1] ◄─ Rotor[0] ◄┘
//! ```
//!
//! Every alphabetic keypress first steps the rotors (including the middle
//! rotor's double step), then sends the contact signal through the pipeline.
//! Anything else is emitted verbatim and leaves the rotors untouched.
//!
//! # Components
//!
//! - [`Rotor`] / [`RotorSpec`]: wiring, notches, and rotational position
//! - [`Plugboard`]: up to [`MAX_PLUG_PAIRS`] letter swaps
//! - [`Reflector`]: fixed involution (Reflector B)
//! - [`Machine`]: stepping rule and encode pipeline
//! - [`Session`]: one operator's transcript over a live machine
//!
//! # Example
//!
//! ```
//! use enigma_core::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default().with_positions([0, 3, 21]).with_plug_pairs(["AB"]);
//!
//! let mut sender = Machine::from_config(&config).unwrap();
//! let ciphertext = sender.encode_text("attack at dawn");
//!
//! let mut receiver = Machine::from_config(&config).unwrap();
//! assert_eq!(receiver.encode_text(&ciphertext), "ATTACK AT DAWN");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
mod config;
mod error;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod session;
mod wiring;

pub use config::MachineConfig;
pub use error::ConfigError;
pub use machine::{Machine, ROTOR_COUNT};
pub use plugboard::{MAX_PLUG_PAIRS, PlugPair, Plugboard};
pub use reflector::{REFLECTOR_B, Reflector};
pub use rotor::{DEFAULT_ROTORS, Notches, ROTOR_I, ROTOR_II, ROTOR_III, Rotor, RotorSpec};
pub use session::Session;
pub use wiring::Wiring;
