//! Modifier names used in `from.modifiers` and `to[].modifiers`.

use serde::{Deserialize, Serialize};

/// A modifier as named by the daemon.
///
/// The unsided variants (`command`, `shift`, ...) match either side when used
/// in `from.modifiers`; `any` matches every modifier combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Command,
    Control,
    Option,
    Shift,
    LeftCommand,
    LeftControl,
    LeftOption,
    LeftShift,
    RightCommand,
    RightControl,
    RightOption,
    RightShift,
    Fn,
    CapsLock,
    Any,
}

/// The four left-hand modifiers that make up the left "Hyper" chord (⌃⌥⇧⌘).
pub const HYPER_LEFT: [Modifier; 4] = [
    Modifier::LeftCommand,
    Modifier::LeftControl,
    Modifier::LeftShift,
    Modifier::LeftOption,
];

/// The right-hand equivalent of [`HYPER_LEFT`].
pub const HYPER_RIGHT: [Modifier; 4] = [
    Modifier::RightCommand,
    Modifier::RightControl,
    Modifier::RightShift,
    Modifier::RightOption,
];

impl Modifier {
    /// Returns `true` for the side-specific variants.
    pub fn is_sided(self) -> bool {
        matches!(
            self,
            Modifier::LeftCommand
                | Modifier::LeftControl
                | Modifier::LeftOption
                | Modifier::LeftShift
                | Modifier::RightCommand
                | Modifier::RightControl
                | Modifier::RightOption
                | Modifier::RightShift
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_serialize_with_daemon_names() {
        let json = serde_json::to_string(&[Modifier::LeftCommand, Modifier::Fn, Modifier::Any])
            .unwrap();
        assert_eq!(json, r#"["left_command","fn","any"]"#);
    }

    #[test]
    fn test_hyper_sets_are_sided_and_disjoint() {
        for m in HYPER_LEFT.iter().chain(HYPER_RIGHT.iter()) {
            assert!(m.is_sided(), "{m:?} should be sided");
        }
        assert!(HYPER_LEFT.iter().all(|m| !HYPER_RIGHT.contains(m)));
    }

    #[test]
    fn test_unsided_modifiers_are_not_sided() {
        assert!(!Modifier::Shift.is_sided());
        assert!(!Modifier::Any.is_sided());
    }
}
