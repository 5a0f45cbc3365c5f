//! Consumer-page (HID page 0x0C) keys: media and eject buttons.
//!
//! The daemon distinguishes these from keyboard-page keys by emitting them
//! under `consumer_key_code` rather than `key_code`.

use serde::{Deserialize, Serialize};

/// A consumer-page key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerKeyCode {
    Eject,
    PlayOrPause,
    Mute,
    VolumeIncrement,
    VolumeDecrement,
    ScanNextTrack,
    ScanPreviousTrack,
    Fastforward,
    Rewind,
}

impl ConsumerKeyCode {
    /// Returns the daemon's name for this key.
    pub fn name(self) -> &'static str {
        match self {
            ConsumerKeyCode::Eject => "eject",
            ConsumerKeyCode::PlayOrPause => "play_or_pause",
            ConsumerKeyCode::Mute => "mute",
            ConsumerKeyCode::VolumeIncrement => "volume_increment",
            ConsumerKeyCode::VolumeDecrement => "volume_decrement",
            ConsumerKeyCode::ScanNextTrack => "scan_next_track",
            ConsumerKeyCode::ScanPreviousTrack => "scan_previous_track",
            ConsumerKeyCode::Fastforward => "fastforward",
            ConsumerKeyCode::Rewind => "rewind",
        }
    }
}
