//! Shorthand that expands into daemon rules.
//!
//! Writing manipulators by hand is repetitive: every sublayer binding repeats
//! the same `from` modifiers and variable condition, and every double-tap
//! needs two manipulators plus a delayed reset.  The helpers in this module
//! produce that boilerplate mechanically from short declarations.
//!
//! - **`command`**    – `open`, `app`, `shell`, `key`: what a bound key does.
//! - **`hyper`**      – Hyper + key entries and variable-gated sublayers.
//! - **`tap_dance`**  – tap / hold / double-tap, modal toggles, chords.
//! - **`conditions`** – frontmost-app, device and variable conditions.

pub mod command;
pub mod conditions;
pub mod hyper;
pub mod tap_dance;

pub use command::{app, key, key_with, open, shell, LayerCommand};
pub use conditions::{device_if, frontmost_app_if, frontmost_app_unless, variable_if, variable_unless};
pub use hyper::{
    create_hyper_sub_layer, create_hyper_sub_layers, shadowed_bindings, HyperEntry, HyperLayers,
    HyperSide, LayerError, ShadowedBinding, Sublayer,
};
pub use tap_dance::{chord, double_click_button, modal_toggle, tap_hold, TapDance, Timing};
