//! Key vocabulary shared by every rule: keyboard keys, consumer keys,
//! pointing buttons and modifiers.
//!
//! The daemon names every input by string.  These modules turn those strings
//! into closed Rust types so a rule set that compiles only uses names the
//! daemon understands.

pub mod consumer;
pub mod key_code;
pub mod modifier;
pub mod pointing;

pub use consumer::ConsumerKeyCode;
pub use key_code::KeyCode;
pub use modifier::{Modifier, HYPER_LEFT, HYPER_RIGHT};
pub use pointing::{PointingButton, PointingButtonError};
