//! Eject key and multi-button mouse bindings.
//!
//! The mouse's side buttons send the number-row keys (`1`..`0`, then `-` and
//! `=` for buttons 11 and 12).  Every binding is gated on the mouse's USB
//! identifiers so the real number row is untouched.
//!
//! App groups are emitted before the global group: the daemon stops at the
//! first matching manipulator, so "button 1 in a browser" must be seen before
//! "button 1 anywhere".

use hyper_core::keymap::Modifier::{
    LeftCommand as CMD, LeftControl as CTRL, LeftOption as OPT, LeftShift as SHIFT,
};
use hyper_core::keymap::{ConsumerKeyCode, KeyCode, Modifier};
use hyper_core::layers::{app, device_if, frontmost_app_if, LayerCommand};
use hyper_core::{Condition, DeviceIdentifier, FromEvent, Manipulator, Rule, ToEvent};

use super::toggle_back_to_previous_app;

pub const BROWSER_IDS: &[&str] = &[
    r"^com\.apple\.Safari$",
    r"^com\.google\.Chrome$",
    r"^com\.google\.Chrome\.canary$",
    r"^com\.opera\.Opera$",
    r"^com\.brave\.Browser$",
];

pub const EDITOR_IDS: &[&str] = &[r"^com\.microsoft\.VSCode$", r"^com\.sublimetext\.4$"];

pub const TERMINAL_IDS: &[&str] = &[r"^com\.googlecode\.iterm2$"];

pub const CAMTASIA_IDS: &[&str] = &[r"^com\.techsmith\.camtasia2023$"];

/// Eject takes a screenshot (⌘⇧5).
pub fn eject_to_screenshot_rule() -> Rule {
    Rule::new(
        "Eject to Screenshot",
        vec![Manipulator::new(FromEvent::new(ConsumerKeyCode::Eject))
            .to([ToEvent::key_with(KeyCode::Digit5, [CMD, SHIFT])])],
    )
}

/// A single non-repeating key stroke.
fn stroke(key: KeyCode, mods: &[Modifier]) -> Vec<ToEvent> {
    vec![ToEvent::key_with(key, mods.iter().copied()).with_repeat(false)]
}

/// One rule holding one manipulator for `button`.
fn button_rule(
    description: &str,
    button: KeyCode,
    to: Vec<ToEvent>,
    conditions: &[Condition],
) -> Rule {
    Rule::new(
        description,
        vec![Manipulator::new(FromEvent::new(button))
            .to(to)
            .when(conditions.iter().cloned())],
    )
}

/// Like [`button_rule`], but the manipulator also carries the command's
/// description.
fn command_rule(
    description: &str,
    button: KeyCode,
    command: LayerCommand,
    conditions: &[Condition],
) -> Rule {
    Rule::new(
        description,
        vec![command.into_manipulator(FromEvent::new(button), conditions)],
    )
}

/// Browser tab navigation.
pub fn browser_rules(mouse: DeviceIdentifier) -> Vec<Rule> {
    let when = [device_if(mouse), frontmost_app_if(BROWSER_IDS.iter().copied())];
    vec![
        button_rule(
            "[BROWSER] - Mouse 1 => PREVIOUS APP",
            KeyCode::Digit1,
            vec![toggle_back_to_previous_app()],
            &when,
        ),
        button_rule(
            "[BROWSER] - Mouse 5 => Tab Left",
            KeyCode::Digit5,
            stroke(KeyCode::Tab, &[CTRL, SHIFT]),
            &when,
        ),
        button_rule(
            "[BROWSER] - Mouse 6 => Tab Right",
            KeyCode::Digit6,
            stroke(KeyCode::Tab, &[CTRL]),
            &when,
        ),
        // Vimium's "go to previous tab"
        button_rule(
            "[BROWSER] - Mouse 9 => Tab Toggle",
            KeyCode::Digit9,
            stroke(KeyCode::Digit6, &[SHIFT]),
            &when,
        ),
        button_rule(
            "[BROWSER] - Mouse 8 => Tab CLOSE",
            KeyCode::Digit8,
            stroke(KeyCode::W, &[CMD]),
            &when,
        ),
        button_rule(
            "[BROWSER] - Mouse 12 => Tab ReOPEN",
            KeyCode::EqualSign,
            stroke(KeyCode::T, &[CMD, SHIFT]),
            &when,
        ),
    ]
}

/// Editor tab navigation and Copilot actions.
pub fn editor_rules(mouse: DeviceIdentifier) -> Vec<Rule> {
    let when = [device_if(mouse), frontmost_app_if(EDITOR_IDS.iter().copied())];
    vec![
        button_rule(
            "[VSCODE] - Mouse 3 => PREVIOUS APP",
            KeyCode::Digit3,
            vec![toggle_back_to_previous_app()],
            &when,
        ),
        button_rule(
            "[VSCODE] - Mouse 5 => Back Tab",
            KeyCode::Digit5,
            stroke(KeyCode::LeftArrow, &[CMD, OPT]),
            &when,
        ),
        button_rule(
            "[VSCODE] - Mouse 6 => Next Tab",
            KeyCode::Digit6,
            stroke(KeyCode::RightArrow, &[CMD, OPT]),
            &when,
        ),
        button_rule(
            "[VSCODE] - Mouse 4 => Copilot Doc selection",
            KeyCode::Digit4,
            stroke(KeyCode::D, &[CMD, OPT, SHIFT]),
            &when,
        ),
        button_rule(
            "[VSCODE] - Mouse 8 => Copilot Explain selection",
            KeyCode::Digit8,
            stroke(KeyCode::E, &[CMD, OPT, SHIFT]),
            &when,
        ),
        button_rule(
            "[VSCODE] - Mouse 7 => Copilot Test selection",
            KeyCode::Digit7,
            stroke(KeyCode::T, &[CMD, OPT, SHIFT]),
            &when,
        ),
    ]
}

/// Terminal tab navigation.
pub fn terminal_rules(mouse: DeviceIdentifier) -> Vec<Rule> {
    let when = [device_if(mouse), frontmost_app_if(TERMINAL_IDS.iter().copied())];
    vec![
        button_rule(
            "[Iterm] - Mouse 2 => PREVIOUS APP",
            KeyCode::Digit2,
            vec![toggle_back_to_previous_app()],
            &when,
        ),
        button_rule(
            "[Iterm] - Mouse 5 => Back Tab",
            KeyCode::Digit5,
            stroke(KeyCode::OpenBracket, &[CMD, SHIFT]),
            &when,
        ),
        button_rule(
            "[Iterm] - Mouse 6 => Next Tab",
            KeyCode::Digit6,
            stroke(KeyCode::CloseBracket, &[CMD, SHIFT]),
            &when,
        ),
    ]
}

/// App launchers and recording control, active everywhere.
pub fn global_rules(mouse: DeviceIdentifier) -> Vec<Rule> {
    let when = [device_if(mouse)];
    vec![
        command_rule(
            "[GLOBAL] Mouse 1 - Open Chrome",
            KeyCode::Digit1,
            app("Google Chrome"),
            &when,
        ),
        command_rule(
            "[GLOBAL] Mouse 2 - Open Iterm",
            KeyCode::Digit2,
            app("iTerm"),
            &when,
        ),
        command_rule(
            "[GLOBAL] Mouse 3 - Open VSCode",
            KeyCode::Digit3,
            app("Visual Studio Code"),
            &when,
        ),
        command_rule(
            "[GLOBAL] Mouse 5 - Open Tower",
            KeyCode::Digit5,
            app("Tower"),
            &when,
        ),
        button_rule(
            "[GLOBAL] Mouse 10 - Stop Recording Camtasia",
            KeyCode::Digit0,
            stroke(KeyCode::Digit2, &[CMD, OPT]),
            &when,
        ),
        button_rule(
            "[GLOBAL] Mouse 11 - Start Recording Camtasia",
            KeyCode::Hyphen,
            stroke(KeyCode::Digit2, &[CMD, SHIFT]),
            &when,
        ),
    ]
}

/// Timeline editing in Camtasia.
pub fn camtasia_rules(mouse: DeviceIdentifier) -> Vec<Rule> {
    let when = [device_if(mouse), frontmost_app_if(CAMTASIA_IDS.iter().copied())];
    vec![
        button_rule(
            "[CAMTASIA] Mouse 7 => Cut tracks",
            KeyCode::Digit7,
            stroke(KeyCode::T, &[CMD, SHIFT]),
            &when,
        ),
        button_rule(
            "[CAMTASIA] Mouse 8 => Ripple delete",
            KeyCode::Digit8,
            stroke(KeyCode::DeleteOrBackspace, &[CMD]),
            &when,
        ),
    ]
}

/// Every mouse rule in evaluation order.
pub fn mouse_rules(mouse: DeviceIdentifier) -> Vec<Rule> {
    let mut rules = browser_rules(mouse);
    rules.extend(editor_rules(mouse));
    rules.extend(terminal_rules(mouse));
    rules.extend(global_rules(mouse));
    rules.extend(camtasia_rules(mouse));
    rules
}
