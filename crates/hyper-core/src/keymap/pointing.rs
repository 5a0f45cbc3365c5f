//! Pointing-device buttons (`button1` .. `button32`).
//!
//! Mice and trackballs report their buttons as numbered pointing buttons:
//! `button1` is the primary click, `button2` the secondary click, `button3`
//! the middle click, and `button4`/`button5` are usually back/forward.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Highest button number the daemon accepts.
pub const MAX_POINTING_BUTTON: u8 = 32;

/// Error returned when a button number or name is out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointingButtonError {
    #[error("pointing button number {0} is out of range 1..={MAX_POINTING_BUTTON}")]
    OutOfRange(u8),

    #[error("not a pointing button name: {0:?}")]
    BadName(String),
}

/// A numbered pointing-device button, serialized as `"buttonN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointingButton(u8);

impl PointingButton {
    pub const PRIMARY: PointingButton = PointingButton(1);
    pub const SECONDARY: PointingButton = PointingButton(2);
    pub const MIDDLE: PointingButton = PointingButton(3);
    pub const BACK: PointingButton = PointingButton(4);
    pub const FORWARD: PointingButton = PointingButton(5);

    /// Creates a button from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`PointingButtonError::OutOfRange`] for 0 or numbers above 32.
    pub fn new(number: u8) -> Result<Self, PointingButtonError> {
        if (1..=MAX_POINTING_BUTTON).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PointingButtonError::OutOfRange(number))
        }
    }

    /// Returns the 1-based button number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Parses a daemon name such as `"button4"`.
    ///
    /// # Errors
    ///
    /// Returns [`PointingButtonError::BadName`] when the prefix or number is
    /// malformed, or [`PointingButtonError::OutOfRange`] for numbers outside 1..=32.
    pub fn from_name(name: &str) -> Result<Self, PointingButtonError> {
        let digits = name
            .strip_prefix("button")
            .ok_or_else(|| PointingButtonError::BadName(name.to_string()))?;
        let number: u8 = digits
            .parse()
            .map_err(|_| PointingButtonError::BadName(name.to_string()))?;
        Self::new(number)
    }
}

impl fmt::Display for PointingButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button{}", self.0)
    }
}

impl Serialize for PointingButton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PointingButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        PointingButton::from_name(&name).map_err(de::Error::custom)
    }
}
