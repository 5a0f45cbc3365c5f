//! # hyper-core
//!
//! Typed building blocks for generating the rule file of a keyboard and mouse
//! remapping daemon (Karabiner-Elements `complex_modifications`).
//!
//! This crate performs no I/O.  It turns short, declarative descriptions of
//! remaps into the daemon's verbose JSON schema and checks the result.
//!
//! # Architecture overview (for beginners)
//!
//! The daemon reads one JSON file: profiles contain rules, rules contain
//! manipulators, and each manipulator maps one input (`from`) to events (`to`,
//! `to_if_alone`, ...) under some conditions.  Writing that JSON by hand is
//! tedious and easy to get subtly wrong, so this crate is split in layers:
//!
//! - **`keymap`** – Closed enums for every key, consumer key, pointing button
//!   and modifier name the daemon understands.  A typo becomes a compile
//!   error instead of a dead binding.
//!
//! - **`domain`** – The daemon's schema as plain `serde` types.  Serializing
//!   a [`Document`] produces the file directly.
//!
//! - **`layers`** – Shorthand that expands into the schema: Hyper key
//!   sublayers, `app` / `open` commands, tap / hold / double-tap buttons,
//!   modal toggles and chords.
//!
//! - **`output`** – JSON rendering and a validation pass that reports every
//!   structural problem before anything is written.

pub mod domain;
pub mod keymap;
pub mod layers;
pub mod output;

// Re-export the most-used types at the crate root so callers can write
// `hyper_core::Manipulator` instead of `hyper_core::domain::manipulator::Manipulator`.
pub use domain::{
    Condition, DeviceIdentifier, Document, FromEvent, Global, Manipulator, Parameters, Profile,
    Rule, ToEvent,
};
pub use keymap::{ConsumerKeyCode, KeyCode, Modifier, PointingButton};
pub use layers::{HyperLayers, HyperSide, LayerCommand, LayerError, TapDance, Timing};
pub use output::{render, validate, OutputError, ValidationIssue, ValidationReport};
