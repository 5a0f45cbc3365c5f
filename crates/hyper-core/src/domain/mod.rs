//! The daemon's configuration schema as Rust types.
//!
//! Nothing in here performs I/O.  The types mirror the JSON the daemon reads
//! (rules → manipulators → from / to / conditions / parameters) closely
//! enough that `serde` produces the file directly, and they can be read back
//! for inspection and tests.
//!
//! # Why mirror the schema so literally? (for beginners)
//!
//! The daemon owns the semantics: it decides when a tap becomes a hold, when a
//! delayed action is cancelled, and in which order manipulators are tried.
//! Inventing a higher-level model here would only add a translation step that
//! can drift from what the daemon actually does.  The higher-level shorthand
//! lives in [`crate::layers`] and always expands into these plain types.

pub mod condition;
pub mod document;
pub mod manipulator;

pub use condition::{Condition, DeviceIdentifier, VariableValue};
pub use document::{ComplexModifications, Document, Global, Profile, Rule};
pub use manipulator::{
    Action, DelayedAction, FromEvent, FromModifiers, InputKey, KeyOrder, KeyUpWhen, Manipulator,
    ManipulatorKind, Parameters, SetVariable, SimultaneousOptions, ToEvent, Trigger,
};
