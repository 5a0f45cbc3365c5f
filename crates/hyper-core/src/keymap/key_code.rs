//! Keyboard `key_code` names understood by the remapping daemon.
//!
//! The daemon identifies keys by lowercase snake_case names rather than by
//! numeric usage IDs.  Most names follow the USB HID Keyboard/Keypad page
//! (page 0x07) descriptions, e.g. `open_bracket` for HID 0x2F and
//! `grave_accent_and_tilde` for HID 0x35.  A handful (`fastforward`,
//! `display_brightness_increment`, ...) are Apple-specific and only make sense
//! on macOS.
//!
//! # Why an enum instead of plain strings? (for beginners)
//!
//! A typo in a key name such as `"left_arow"` is silently accepted by the
//! daemon's JSON loader and the rule simply never fires.  Modelling the
//! vocabulary as a Rust enum moves that mistake to compile time: a misspelled
//! variant does not compile, and names read from config files are checked by
//! [`KeyCode::from_name`].

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A key on the keyboard page, named the way the daemon's JSON expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits (top row)
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,

    // Control keys
    ReturnOrEnter,
    Escape,
    DeleteOrBackspace,
    DeleteForward,
    Tab,
    Spacebar,
    CapsLock,

    // Punctuation
    Hyphen,
    EqualSign,
    OpenBracket,
    CloseBracket,
    Backslash,
    Semicolon,
    Quote,
    GraveAccentAndTilde,
    Comma,
    Period,
    Slash,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Navigation cluster
    Home,
    End,
    PageUp,
    PageDown,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,

    // Modifier keys
    LeftControl,
    LeftShift,
    LeftOption,
    LeftCommand,
    RightControl,
    RightShift,
    RightOption,
    RightCommand,
    Fn,

    // Media and system keys
    Mute,
    VolumeDecrement,
    VolumeIncrement,
    DisplayBrightnessDecrement,
    DisplayBrightnessIncrement,
    MissionControl,
    Launchpad,
    Rewind,
    PlayOrPause,
    Fastforward,
}

impl KeyCode {
    /// Every variant, in declaration order.
    pub const ALL: &'static [KeyCode] = &[
        KeyCode::A,
        KeyCode::B,
        KeyCode::C,
        KeyCode::D,
        KeyCode::E,
        KeyCode::F,
        KeyCode::G,
        KeyCode::H,
        KeyCode::I,
        KeyCode::J,
        KeyCode::K,
        KeyCode::L,
        KeyCode::M,
        KeyCode::N,
        KeyCode::O,
        KeyCode::P,
        KeyCode::Q,
        KeyCode::R,
        KeyCode::S,
        KeyCode::T,
        KeyCode::U,
        KeyCode::V,
        KeyCode::W,
        KeyCode::X,
        KeyCode::Y,
        KeyCode::Z,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
        KeyCode::Digit0,
        KeyCode::ReturnOrEnter,
        KeyCode::Escape,
        KeyCode::DeleteOrBackspace,
        KeyCode::DeleteForward,
        KeyCode::Tab,
        KeyCode::Spacebar,
        KeyCode::CapsLock,
        KeyCode::Hyphen,
        KeyCode::EqualSign,
        KeyCode::OpenBracket,
        KeyCode::CloseBracket,
        KeyCode::Backslash,
        KeyCode::Semicolon,
        KeyCode::Quote,
        KeyCode::GraveAccentAndTilde,
        KeyCode::Comma,
        KeyCode::Period,
        KeyCode::Slash,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
        KeyCode::F12,
        KeyCode::Home,
        KeyCode::End,
        KeyCode::PageUp,
        KeyCode::PageDown,
        KeyCode::LeftArrow,
        KeyCode::RightArrow,
        KeyCode::UpArrow,
        KeyCode::DownArrow,
        KeyCode::LeftControl,
        KeyCode::LeftShift,
        KeyCode::LeftOption,
        KeyCode::LeftCommand,
        KeyCode::RightControl,
        KeyCode::RightShift,
        KeyCode::RightOption,
        KeyCode::RightCommand,
        KeyCode::Fn,
        KeyCode::Mute,
        KeyCode::VolumeDecrement,
        KeyCode::VolumeIncrement,
        KeyCode::DisplayBrightnessDecrement,
        KeyCode::DisplayBrightnessIncrement,
        KeyCode::MissionControl,
        KeyCode::Launchpad,
        KeyCode::Rewind,
        KeyCode::PlayOrPause,
        KeyCode::Fastforward,
    ];

    /// Returns the daemon's name for this key.
    pub fn name(self) -> &'static str {
        match self {
            KeyCode::A => "a",
            KeyCode::B => "b",
            KeyCode::C => "c",
            KeyCode::D => "d",
            KeyCode::E => "e",
            KeyCode::F => "f",
            KeyCode::G => "g",
            KeyCode::H => "h",
            KeyCode::I => "i",
            KeyCode::J => "j",
            KeyCode::K => "k",
            KeyCode::L => "l",
            KeyCode::M => "m",
            KeyCode::N => "n",
            KeyCode::O => "o",
            KeyCode::P => "p",
            KeyCode::Q => "q",
            KeyCode::R => "r",
            KeyCode::S => "s",
            KeyCode::T => "t",
            KeyCode::U => "u",
            KeyCode::V => "v",
            KeyCode::W => "w",
            KeyCode::X => "x",
            KeyCode::Y => "y",
            KeyCode::Z => "z",
            KeyCode::Digit1 => "1",
            KeyCode::Digit2 => "2",
            KeyCode::Digit3 => "3",
            KeyCode::Digit4 => "4",
            KeyCode::Digit5 => "5",
            KeyCode::Digit6 => "6",
            KeyCode::Digit7 => "7",
            KeyCode::Digit8 => "8",
            KeyCode::Digit9 => "9",
            KeyCode::Digit0 => "0",
            KeyCode::ReturnOrEnter => "return_or_enter",
            KeyCode::Escape => "escape",
            KeyCode::DeleteOrBackspace => "delete_or_backspace",
            KeyCode::DeleteForward => "delete_forward",
            KeyCode::Tab => "tab",
            KeyCode::Spacebar => "spacebar",
            KeyCode::CapsLock => "caps_lock",
            KeyCode::Hyphen => "hyphen",
            KeyCode::EqualSign => "equal_sign",
            KeyCode::OpenBracket => "open_bracket",
            KeyCode::CloseBracket => "close_bracket",
            KeyCode::Backslash => "backslash",
            KeyCode::Semicolon => "semicolon",
            KeyCode::Quote => "quote",
            KeyCode::GraveAccentAndTilde => "grave_accent_and_tilde",
            KeyCode::Comma => "comma",
            KeyCode::Period => "period",
            KeyCode::Slash => "slash",
            KeyCode::F1 => "f1",
            KeyCode::F2 => "f2",
            KeyCode::F3 => "f3",
            KeyCode::F4 => "f4",
            KeyCode::F5 => "f5",
            KeyCode::F6 => "f6",
            KeyCode::F7 => "f7",
            KeyCode::F8 => "f8",
            KeyCode::F9 => "f9",
            KeyCode::F10 => "f10",
            KeyCode::F11 => "f11",
            KeyCode::F12 => "f12",
            KeyCode::Home => "home",
            KeyCode::End => "end",
            KeyCode::PageUp => "page_up",
            KeyCode::PageDown => "page_down",
            KeyCode::LeftArrow => "left_arrow",
            KeyCode::RightArrow => "right_arrow",
            KeyCode::UpArrow => "up_arrow",
            KeyCode::DownArrow => "down_arrow",
            KeyCode::LeftControl => "left_control",
            KeyCode::LeftShift => "left_shift",
            KeyCode::LeftOption => "left_option",
            KeyCode::LeftCommand => "left_command",
            KeyCode::RightControl => "right_control",
            KeyCode::RightShift => "right_shift",
            KeyCode::RightOption => "right_option",
            KeyCode::RightCommand => "right_command",
            KeyCode::Fn => "fn",
            KeyCode::Mute => "mute",
            KeyCode::VolumeDecrement => "volume_decrement",
            KeyCode::VolumeIncrement => "volume_increment",
            KeyCode::DisplayBrightnessDecrement => "display_brightness_decrement",
            KeyCode::DisplayBrightnessIncrement => "display_brightness_increment",
            KeyCode::MissionControl => "mission_control",
            KeyCode::Launchpad => "launchpad",
            KeyCode::Rewind => "rewind",
            KeyCode::PlayOrPause => "play_or_pause",
            KeyCode::Fastforward => "fastforward",
        }
    }

    /// Looks up a key by its daemon name.
    ///
    /// Returns `None` if `name` is not part of the vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Returns `true` if this is one of the nine modifier keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::LeftControl
                | KeyCode::LeftShift
                | KeyCode::LeftOption
                | KeyCode::LeftCommand
                | KeyCode::RightControl
                | KeyCode::RightShift
                | KeyCode::RightOption
                | KeyCode::RightCommand
                | KeyCode::Fn
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for KeyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for KeyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        KeyCode::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown key_code: {name}")))
    }
}
