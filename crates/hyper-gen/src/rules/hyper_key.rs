//! Caps Lock as the Hyper key.

use hyper_core::keymap::{KeyCode, Modifier};
use hyper_core::{FromEvent, Manipulator, Rule, ToEvent};

/// Caps Lock sends ⌃⌥⇧⌘ while held and Escape when tapped alone.
///
/// The chord is produced as `left_shift` with the other three modifiers
/// attached, which the daemon treats the same as holding all four.
pub fn hyper_key_rule() -> Rule {
    Rule::new(
        "Hyper Key (⌃⌥⇧⌘)",
        vec![Manipulator::new(FromEvent::new(KeyCode::CapsLock))
            .describe("Caps Lock -> Hyper Key")
            .to([ToEvent::key_with(
                KeyCode::LeftShift,
                [
                    Modifier::LeftCommand,
                    Modifier::LeftControl,
                    Modifier::LeftOption,
                ],
            )])
            .to_if_alone([ToEvent::key(KeyCode::Escape)])],
    )
}
