//! Hyper + key shortcuts and sublayers.
//!
//! | Key | Kind     | Purpose                                         |
//! |-----|----------|-------------------------------------------------|
//! | `7` | direct   | up arrow                                        |
//! | `o` | sublayer | **O**pen apps and links                         |
//! | `a` | direct   | move window to the left display                 |
//! | `s` | direct   | move window to the right display                |
//! | `w` | sublayer | **W**indow management via Rectangle             |
//! | `z` | sublayer | system: volume, brightness, lock, key light     |
//! | `v` | sublayer | mo**v**e: vim-style arrows, Homerow             |
//! | `c` | sublayer | musi**c**                                       |
//! | `r` | sublayer | **R**aycast commands                            |
//!
//! `a` and `s` are declared before `v` and `r`, so Hyper + `a` / `s` still win
//! while those sublayers are held: `v` → `s`, `r` → `a` and `r` → `s` never
//! fire.  Expansion logs a warning for each.

use hyper_core::keymap::Modifier::{
    LeftCommand, LeftControl, LeftOption, RightCommand, RightControl, RightOption, RightShift,
};
use hyper_core::keymap::KeyCode;
use hyper_core::layers::{app, key, key_with, open, shell, HyperLayers, HyperSide, LayerError};
use hyper_core::Rule;

/// Elgato Key Light endpoint on the local network.
const KEY_LIGHT_URL: &str = "http://192.168.8.84:9123/elgato/lights";

/// `curl` command switching the key light on (`1`) or off (`0`).
fn key_light(on: u8) -> String {
    format!(
        "curl -H 'Content-Type: application/json' --request PUT --data \
         '{{ \"numberOfLights\": 1, \"lights\": [ {{ \"on\": {on}, \"brightness\": 100, \"temperature\": 215 }} ] }}' \
         {KEY_LIGHT_URL}"
    )
}

/// The left-hand Hyper layer declarations.
pub fn left_hyper_layers() -> HyperLayers {
    HyperLayers::new(HyperSide::Left)
        .direct(KeyCode::Digit7, key(KeyCode::UpArrow))
        .sublayer(KeyCode::O, |l| {
            l.bind(KeyCode::Digit1, app("1Password"))
                .bind(KeyCode::G, app("Google Chrome"))
                .bind(KeyCode::C, app("Google Chrome"))
                .bind(KeyCode::V, app("Visual Studio Code"))
                .bind(KeyCode::D, app("Discord"))
                .bind(KeyCode::S, app("Slack"))
                .bind(KeyCode::E, app("Superhuman"))
                .bind(KeyCode::N, app("Notion"))
                .bind(KeyCode::T, app("Warp"))
                // Todo list, managed via *H*ypersonic
                .bind(
                    KeyCode::H,
                    open("notion://www.notion.so/stellatehq/7b33b924746647499d906c55f89d5026"),
                )
                .bind(KeyCode::Z, app("zoom.us"))
                .bind(KeyCode::M, app("Mochi"))
                .bind(KeyCode::F, app("Finder"))
                .bind(KeyCode::R, app("Telegram"))
                // "i"Message
                .bind(KeyCode::I, app("Messages"))
                .bind(KeyCode::P, app("Spotify"))
                .bind(KeyCode::A, app("iA Presenter"))
                .bind(KeyCode::W, open("https://web.whatsapp.com"))
                .bind(
                    KeyCode::L,
                    open("raycast://extensions/stellate/mxstbr-commands/open-mxs-is-shortlink"),
                )
        })
        .direct(
            KeyCode::A,
            key_with(KeyCode::LeftArrow, [LeftOption, LeftCommand, LeftControl])
                .describe("Window: Move to left display"),
        )
        .direct(
            KeyCode::S,
            key_with(KeyCode::RightArrow, [LeftOption, LeftCommand, LeftControl])
                .describe("Window: Move to right display"),
        )
        .sublayer(KeyCode::W, |l| {
            l.bind(
                KeyCode::Semicolon,
                key_with(KeyCode::H, [RightCommand]).describe("Window: Hide"),
            )
            .bind(
                KeyCode::Y,
                key_with(KeyCode::LeftArrow, [RightOption, RightControl])
                    .describe("Window: First Third"),
            )
            .bind(
                KeyCode::K,
                key_with(KeyCode::UpArrow, [RightOption, RightCommand])
                    .describe("Window: Top Half"),
            )
            .bind(
                KeyCode::J,
                key_with(KeyCode::DownArrow, [RightOption, RightCommand])
                    .describe("Window: Bottom Half"),
            )
            .bind(
                KeyCode::O,
                key_with(KeyCode::RightArrow, [RightOption, RightControl])
                    .describe("Window: Last Third"),
            )
            .bind(
                KeyCode::H,
                key_with(KeyCode::LeftArrow, [RightOption, RightCommand])
                    .describe("Window: Left Half"),
            )
            .bind(
                KeyCode::L,
                key_with(KeyCode::RightArrow, [RightOption, RightCommand])
                    .describe("Window: Right Half"),
            )
            .bind(
                KeyCode::F,
                key_with(KeyCode::F, [RightOption, RightCommand]).describe("Window: Full Screen"),
            )
            .bind(
                KeyCode::U,
                key_with(KeyCode::Tab, [RightControl, RightShift])
                    .describe("Window: Previous Tab"),
            )
            .bind(
                KeyCode::I,
                key_with(KeyCode::Tab, [RightControl]).describe("Window: Next Tab"),
            )
            .bind(
                KeyCode::N,
                key_with(KeyCode::GraveAccentAndTilde, [RightCommand])
                    .describe("Window: Next Window"),
            )
            .bind(
                KeyCode::B,
                key_with(KeyCode::OpenBracket, [RightCommand]).describe("Window: Back"),
            )
            // f and n are both taken
            .bind(
                KeyCode::M,
                key_with(KeyCode::CloseBracket, [RightCommand]).describe("Window: Forward"),
            )
            .bind(
                KeyCode::D,
                key_with(KeyCode::RightArrow, [RightControl, RightOption, RightCommand])
                    .describe("Window: Next display"),
            )
        })
        .sublayer(KeyCode::Z, |l| {
            l.bind(KeyCode::U, key(KeyCode::VolumeIncrement))
                .bind(KeyCode::J, key(KeyCode::VolumeDecrement))
                .bind(KeyCode::I, key(KeyCode::DisplayBrightnessIncrement))
                .bind(KeyCode::K, key(KeyCode::DisplayBrightnessDecrement))
                .bind(KeyCode::L, key_with(KeyCode::Q, [RightControl, RightCommand]))
                .bind(KeyCode::P, key(KeyCode::PlayOrPause))
                .bind(KeyCode::Semicolon, key(KeyCode::Fastforward))
                // Emoji picker
                .bind(KeyCode::E, key_with(KeyCode::Spacebar, [RightControl, RightCommand]))
                .bind(KeyCode::Y, shell(key_light(1)))
                .bind(KeyCode::H, shell(key_light(0)))
        })
        // "moVe" sits on the left hand so hjkl work like they do in vim
        .sublayer(KeyCode::V, |l| {
            l.bind(KeyCode::H, key(KeyCode::LeftArrow))
                .bind(KeyCode::J, key(KeyCode::DownArrow))
                .bind(KeyCode::K, key(KeyCode::UpArrow))
                .bind(KeyCode::L, key(KeyCode::RightArrow))
                // Homerow: magic move, then scroll mode
                .bind(KeyCode::M, key_with(KeyCode::F, [RightControl]))
                .bind(KeyCode::S, key_with(KeyCode::J, [RightControl]))
                .bind(KeyCode::D, key_with(KeyCode::D, [RightShift, RightCommand]))
                .bind(KeyCode::U, key(KeyCode::PageDown))
                .bind(KeyCode::I, key(KeyCode::PageUp))
        })
        .sublayer(KeyCode::C, |l| {
            l.bind(KeyCode::P, key(KeyCode::PlayOrPause))
                .bind(KeyCode::N, key(KeyCode::Fastforward))
                .bind(KeyCode::B, key(KeyCode::Rewind))
        })
        .sublayer(KeyCode::R, |l| {
            l.bind(
                KeyCode::Digit1,
                open("raycast://extensions/VladCuciureanu/toothpick/connect-favorite-device-1"),
            )
            .bind(
                KeyCode::Digit2,
                open("raycast://extensions/VladCuciureanu/toothpick/connect-favorite-device-2"),
            )
            .bind(
                KeyCode::L,
                open("raycast://extensions/stellate/mxstbr-commands/create-mxs-is-shortlink"),
            )
            .bind(
                KeyCode::E,
                open("raycast://extensions/raycast/emoji-symbols/search-emoji-symbols"),
            )
            .bind(KeyCode::C, open("raycast://extensions/raycast/system/open-camera"))
            .bind(KeyCode::P, open("raycast://extensions/raycast/raycast/confetti"))
            .bind(KeyCode::A, open("raycast://extensions/raycast/raycast-ai/ai-chat"))
            .bind(KeyCode::S, open("raycast://extensions/peduarte/silent-mention/index"))
            .bind(
                KeyCode::H,
                open("raycast://extensions/raycast/clipboard-history/clipboard-history"),
            )
        })
}

/// Expands [`left_hyper_layers`] into rules.
///
/// # Errors
///
/// Returns [`LayerError`] if the declarations contain a duplicate or empty
/// entry.
pub fn hyper_layer_rules() -> Result<Vec<Rule>, LayerError> {
    left_hyper_layers().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper_core::domain::Action;
    use serde_json::json;

    #[test]
    fn test_layer_rules_expand_in_declaration_order() {
        // Act
        let rules = hyper_layer_rules().unwrap();

        // Assert
        let descriptions: Vec<&str> = rules.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Hyper Key + 7",
                "Hyper Key sublayer \"o\"",
                "Hyper Key + a",
                "Hyper Key + s",
                "Hyper Key sublayer \"w\"",
                "Hyper Key sublayer \"z\"",
                "Hyper Key sublayer \"v\"",
                "Hyper Key sublayer \"c\"",
                "Hyper Key sublayer \"r\"",
            ]
        );
    }

    #[test]
    fn test_open_sublayer_toggle_excludes_other_sublayers_only() {
        let rules = hyper_layer_rules().unwrap();
        let toggle = &rules[1].manipulators[0];
        let names: Vec<&str> = toggle
            .conditions
            .iter()
            .filter_map(|c| c.variable_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "hyper_sublayer_w",
                "hyper_sublayer_z",
                "hyper_sublayer_v",
                "hyper_sublayer_c",
                "hyper_sublayer_r",
            ]
        );
    }

    #[test]
    fn test_direct_entry_keeps_description() {
        let rules = hyper_layer_rules().unwrap();
        let value = serde_json::to_value(&rules[2].manipulators[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "Window: Move to left display",
                "type": "basic",
                "from": {
                    "key_code": "a",
                    "modifiers": {
                        "mandatory": ["left_command", "left_control", "left_shift", "left_option"]
                    }
                },
                "to": [{
                    "key_code": "left_arrow",
                    "modifiers": ["left_option", "left_command", "left_control"]
                }]
            })
        );
    }

    #[test]
    fn test_display_moves_shadow_movement_and_raycast_bindings() {
        // Act
        let shadowed = left_hyper_layers().shadowed_bindings();

        // Assert
        let pairs: Vec<(KeyCode, KeyCode)> =
            shadowed.iter().map(|s| (s.sublayer, s.key)).collect();
        assert_eq!(
            pairs,
            vec![
                (KeyCode::V, KeyCode::S),
                (KeyCode::R, KeyCode::A),
                (KeyCode::R, KeyCode::S),
            ]
        );
    }

    #[test]
    fn test_key_light_commands_differ_only_in_on_flag() {
        // Arrange
        let on = key_light(1);
        let off = key_light(0);

        // Assert
        assert!(on.contains("\"on\": 1"));
        assert!(off.contains("\"on\": 0"));
        assert!(on.starts_with("curl -H 'Content-Type: application/json' --request PUT"));
        assert!(on.ends_with(" http://192.168.8.84:9123/elgato/lights"));
        assert_eq!(on.replace("\"on\": 1", "\"on\": 0"), off);
    }

    #[test]
    fn test_system_sublayer_runs_key_light_through_shell() {
        let rules = hyper_layer_rules().unwrap();
        let z = &rules[5];
        let shells: Vec<&str> = z
            .manipulators
            .iter()
            .flat_map(|m| m.to.iter())
            .filter_map(|e| match &e.action {
                Action::ShellCommand(cmd) => Some(cmd.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(shells, vec![key_light(1), key_light(0)]);
    }
}
