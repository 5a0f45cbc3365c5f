//! Handheld trackball remote (Elecom Relacon).
//!
//! Every button can carry up to four gestures:
//!
//! | Gesture    | How it is produced                                        |
//! |------------|-----------------------------------------------------------|
//! | tap        | `to_if_alone` of the first-press manipulator              |
//! | double tap | second manipulator gated on the button's "tapped" variable |
//! | hold       | `to_if_held_down` of the first-press manipulator          |
//! | B2 combo   | any button pressed while B2 is held                       |
//!
//! B2 is the layer key: holding it sets `relacon_b2`, tapping it still
//! right-clicks.  B4 and B5 pressed together form a chord.
//!
//! The same table feeds [`relacon_map`], which is exported as
//! `relacon-map.json` for the README's button table.
//!
//! # Ordering
//!
//! Manipulators are emitted as combos, chords, the layer key, then per-button
//! gestures.  Combos must precede the plain gestures of the same button, and a
//! chord must precede the single-button manipulators of its inputs.

use hyper_core::domain::{InputKey, Trigger};
use hyper_core::keymap::Modifier::{LeftCommand as CMD, LeftControl as CTRL, LeftShift as SHIFT};
use hyper_core::keymap::{ConsumerKeyCode, KeyCode, PointingButton};
use hyper_core::layers::{
    chord, device_if, double_click_button, modal_toggle, variable_if, TapDance, Timing,
};
use hyper_core::{DeviceIdentifier, FromEvent, Manipulator, Rule, ToEvent};
use serde::Serialize;
use tracing::debug;

use super::toggle_back_to_previous_app;

/// Variable that is 1 while B2 is held.
pub const B2_VARIABLE: &str = "relacon_b2";

/// Placeholder shown in the map for an unassigned gesture.
const NONE_LABEL: &str = "-";

/// A labelled list of events.
///
/// An empty event list means "let the button do what it normally does".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gesture {
    pub label: &'static str,
    pub events: Vec<ToEvent>,
}

impl Gesture {
    fn new(label: &'static str, events: Vec<ToEvent>) -> Self {
        Self { label, events }
    }

    fn native(label: &'static str) -> Self {
        Self::new(label, Vec::new())
    }

    fn is_native(&self) -> bool {
        self.events.is_empty()
    }
}

/// One physical button and its gestures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaconButton {
    /// Label printed on the device, e.g. `B4`.
    pub name: &'static str,
    /// Identifier used in variable names.
    pub id: &'static str,
    pub input: InputKey,
    pub tap: Gesture,
    pub double_tap: Option<Gesture>,
    pub hold: Option<Gesture>,
    pub b2_combo: Option<Gesture>,
    /// The button that switches the combo layer.
    pub layer_key: bool,
}

/// Several buttons pressed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaconChord {
    pub inputs: Vec<InputKey>,
    pub action: Gesture,
}

impl RelaconChord {
    fn name(&self, buttons: &[RelaconButton]) -> String {
        self.inputs
            .iter()
            .map(|input| {
                buttons
                    .iter()
                    .find(|b| b.input == *input)
                    .map_or_else(|| input.name(), |b| b.name.to_string())
            })
            .collect::<Vec<_>>()
            .join("+")
    }
}

fn stroke(key: KeyCode, mods: &[hyper_core::Modifier]) -> Vec<ToEvent> {
    vec![ToEvent::key_with(key, mods.iter().copied())]
}

/// The button table.
pub fn buttons() -> Vec<RelaconButton> {
    vec![
        RelaconButton {
            name: "B1",
            id: "b1",
            input: PointingButton::PRIMARY.into(),
            tap: Gesture::native("Left click"),
            double_tap: None,
            hold: None,
            b2_combo: Some(Gesture::new("Mission Control", stroke(KeyCode::MissionControl, &[]))),
            layer_key: false,
        },
        RelaconButton {
            name: "B2",
            id: "b2",
            input: PointingButton::SECONDARY.into(),
            tap: Gesture::new("Right click", vec![ToEvent::button(PointingButton::SECONDARY)]),
            double_tap: None,
            hold: Some(Gesture::native("B2 combo layer")),
            b2_combo: None,
            layer_key: true,
        },
        RelaconButton {
            name: "B3",
            id: "b3",
            input: PointingButton::MIDDLE.into(),
            tap: Gesture::native("Middle click"),
            double_tap: Some(Gesture::new("Close tab", stroke(KeyCode::W, &[CMD]))),
            hold: None,
            b2_combo: Some(Gesture::new("Launchpad", stroke(KeyCode::Launchpad, &[]))),
            layer_key: false,
        },
        RelaconButton {
            name: "B4",
            id: "b4",
            input: PointingButton::BACK.into(),
            tap: Gesture::new("Back", stroke(KeyCode::OpenBracket, &[CMD])),
            double_tap: Some(Gesture::new("Reopen tab", stroke(KeyCode::T, &[CMD, SHIFT]))),
            hold: Some(Gesture::new("Previous tab", stroke(KeyCode::Tab, &[CTRL, SHIFT]))),
            b2_combo: Some(Gesture::new("Previous app", vec![toggle_back_to_previous_app()])),
            layer_key: false,
        },
        RelaconButton {
            name: "B5",
            id: "b5",
            input: PointingButton::FORWARD.into(),
            tap: Gesture::new("Forward", stroke(KeyCode::CloseBracket, &[CMD])),
            double_tap: Some(Gesture::new("New tab", stroke(KeyCode::T, &[CMD]))),
            hold: Some(Gesture::new("Next tab", stroke(KeyCode::Tab, &[CTRL]))),
            b2_combo: Some(Gesture::new("Screenshot", stroke(KeyCode::Digit5, &[CMD, SHIFT]))),
            layer_key: false,
        },
        RelaconButton {
            name: "Vol+",
            id: "vol_up",
            input: ConsumerKeyCode::VolumeIncrement.into(),
            tap: Gesture::native("Volume up"),
            double_tap: None,
            hold: None,
            b2_combo: Some(Gesture::new(
                "Brightness up",
                stroke(KeyCode::DisplayBrightnessIncrement, &[]),
            )),
            layer_key: false,
        },
        RelaconButton {
            name: "Vol-",
            id: "vol_down",
            input: ConsumerKeyCode::VolumeDecrement.into(),
            tap: Gesture::native("Volume down"),
            double_tap: None,
            hold: None,
            b2_combo: Some(Gesture::new(
                "Brightness down",
                stroke(KeyCode::DisplayBrightnessDecrement, &[]),
            )),
            layer_key: false,
        },
        RelaconButton {
            name: "Play",
            id: "play",
            input: ConsumerKeyCode::PlayOrPause.into(),
            tap: Gesture::native("Play / pause"),
            double_tap: Some(Gesture::new(
                "Next track",
                vec![ToEvent::consumer(ConsumerKeyCode::ScanNextTrack)],
            )),
            hold: None,
            b2_combo: Some(Gesture::new("Mute", vec![ToEvent::consumer(ConsumerKeyCode::Mute)])),
            layer_key: false,
        },
    ]
}

/// Chords, checked before any single-button gesture.
pub fn chords() -> Vec<RelaconChord> {
    vec![RelaconChord {
        inputs: vec![PointingButton::BACK.into(), PointingButton::FORWARD.into()],
        action: Gesture::new("Show desktop", stroke(KeyCode::F11, &[])),
    }]
}

fn from_input(input: InputKey) -> FromEvent {
    FromEvent::new(Trigger::from(input))
}

/// Gesture manipulators for one non-layer button, or nothing when every
/// gesture is native.
fn button_manipulators(
    button: &RelaconButton,
    device: DeviceIdentifier,
    timing: &Timing,
) -> Vec<Manipulator> {
    let double_tap = button.double_tap.as_ref().filter(|g| !g.is_native());
    let hold = button.hold.as_ref().filter(|g| !g.is_native());
    if double_tap.is_none() && hold.is_none() && button.tap.is_native() {
        return Vec::new();
    }

    // Once the button is intercepted its own event has to be re-emitted.
    let tap = if button.tap.is_native() {
        vec![ToEvent::input(button.input)]
    } else {
        button.tap.events.clone()
    };

    let dance = TapDance {
        tap,
        double_tap: double_tap.map(|g| g.events.clone()).unwrap_or_default(),
        hold: hold.map(|g| g.events.clone()).unwrap_or_default(),
    };
    double_click_button(
        from_input(button.input),
        dance,
        &format!("relacon_{}_tapped", button.id),
        timing,
        &[device_if(device)],
    )
}

/// Every trackball rule, in evaluation order.
pub fn relacon_rules(device: DeviceIdentifier, timing: &Timing) -> Vec<Rule> {
    let buttons = buttons();
    let mut rules = Vec::new();

    let combos: Vec<Manipulator> = buttons
        .iter()
        .filter_map(|b| b.b2_combo.as_ref().map(|g| (b, g)))
        .filter(|(_, g)| !g.is_native())
        .map(|(b, g)| {
            Manipulator::new(from_input(b.input))
                .to(g.events.clone())
                .when([device_if(device), variable_if(B2_VARIABLE, 1)])
        })
        .collect();
    if !combos.is_empty() {
        rules.push(Rule::new("[RELACON] B2 + button combos", combos));
    }

    for c in chords() {
        rules.push(Rule::new(
            format!("[RELACON] {} => {}", c.name(&buttons), c.action.label),
            vec![chord(
                c.inputs.iter().copied(),
                c.action.events.clone(),
                timing,
                &[device_if(device)],
            )],
        ));
    }

    for button in &buttons {
        if button.layer_key {
            let alone = if button.tap.is_native() {
                vec![ToEvent::input(button.input)]
            } else {
                button.tap.events.clone()
            };
            rules.push(Rule::new(
                format!("[RELACON] {} => hold for combo layer", button.name),
                vec![modal_toggle(
                    from_input(button.input),
                    B2_VARIABLE,
                    alone,
                    &[device_if(device)],
                )],
            ));
            continue;
        }

        let manipulators = button_manipulators(button, device, timing);
        if manipulators.is_empty() {
            continue;
        }
        let entry = RelaconMapEntry::from_button(button);
        rules.push(Rule::new(
            format!(
                "[RELACON] {} => tap: {}, double tap: {}, hold: {}",
                entry.name, entry.tap, entry.double_tap, entry.hold
            ),
            manipulators,
        ));
    }

    debug!(rules = rules.len(), "expanded trackball rules");
    rules
}

// ── Map export ────────────────────────────────────────────────────────────────

/// One row of `relacon-map.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaconMapEntry {
    pub name: String,
    pub event: String,
    pub tap: String,
    pub double_tap: String,
    pub hold: String,
    pub b2_combo: String,
}

fn label(gesture: Option<&Gesture>) -> String {
    gesture.map_or(NONE_LABEL, |g| g.label).to_string()
}

impl RelaconMapEntry {
    fn from_button(button: &RelaconButton) -> Self {
        Self {
            name: button.name.to_string(),
            event: button.input.name(),
            tap: button.tap.label.to_string(),
            double_tap: label(button.double_tap.as_ref()),
            hold: label(button.hold.as_ref()),
            b2_combo: label(button.b2_combo.as_ref()),
        }
    }
}

/// The button table as documentation rows, buttons first, then chords.
pub fn relacon_map() -> Vec<RelaconMapEntry> {
    let buttons = buttons();
    let mut rows: Vec<RelaconMapEntry> = buttons.iter().map(RelaconMapEntry::from_button).collect();
    rows.extend(chords().iter().map(|c| RelaconMapEntry {
        name: c.name(&buttons),
        event: c
            .inputs
            .iter()
            .map(InputKey::name)
            .collect::<Vec<_>>()
            .join(" + "),
        tap: c.action.label.to_string(),
        double_tap: NONE_LABEL.to_string(),
        hold: NONE_LABEL.to_string(),
        b2_combo: NONE_LABEL.to_string(),
    }));
    rows
}

/// Renders [`relacon_map`] as pretty JSON.
///
/// # Errors
///
/// Returns the serializer error, which cannot happen for these plain rows in
/// practice.
pub fn render_relacon_map() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&relacon_map())
}
