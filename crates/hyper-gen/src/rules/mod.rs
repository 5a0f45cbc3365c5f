//! The personal rule set.
//!
//! Each sub-module contributes rules for one device or concern.  The daemon
//! is first-match-wins across the whole rule list, so
//! [`crate::application::build_document`] concatenates them in a fixed
//! order: app-specific bindings always come before global ones for the same
//! input.
//!
//! - **`hyper_key`**     – Caps Lock becomes ⌃⌥⇧⌘, or Escape when tapped.
//! - **`auto_quotes`**   – Bracket and quote auto-closing in editors.
//! - **`mouse_buttons`** – Eject key and the multi-button mouse's side keys.
//! - **`relacon`**       – Trackball remote: tap, double tap, hold, combos.
//! - **`hyper_layers`**  – Hyper + key shortcuts and sublayers.

pub mod auto_quotes;
pub mod hyper_key;
pub mod hyper_layers;
pub mod mouse_buttons;
pub mod relacon;

use hyper_core::keymap::{KeyCode, Modifier};
use hyper_core::ToEvent;

/// Bundle identifiers of the text editors that get auto-closing.
pub const TEXT_EDITOR_IDS: &[&str] = &[
    r"^com\.microsoft\.VSCode$",
    r"^com\.sublimetext\.4$",
    r"^com\.github\.atom$",
    r"^com\.googlecode\.iterm2$",
    r"^com\.jetbrains\.pycharm$",
    r"^com\.visualstudio\.code\.oss$",
];

/// Switches back to the previously focused app.
///
/// ⌃⌥⇧⌘ L is bound to "previous app" in Keyboard Maestro.
pub fn toggle_back_to_previous_app() -> ToEvent {
    ToEvent::key_with(
        KeyCode::L,
        [
            Modifier::LeftCommand,
            Modifier::LeftOption,
            Modifier::LeftShift,
            Modifier::LeftControl,
        ],
    )
    .with_repeat(false)
}
