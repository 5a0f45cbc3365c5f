//! Manipulators: the unit of remapping inside a rule.
//!
//! A manipulator says "when `from` happens and every condition holds, emit
//! these events".  The daemon offers several emission slots that it arbitrates
//! at runtime:
//!
//! | Slot                | Fires when                                              |
//! |---------------------|---------------------------------------------------------|
//! | `to`                | on key down                                             |
//! | `to_if_alone`       | on key up, if nothing else was pressed within the timeout |
//! | `to_if_held_down`   | once the key has been held past the hold threshold      |
//! | `to_after_key_up`   | on key up, always                                       |
//! | `to_delayed_action` | after the delay; `to_if_canceled` if another key interrupts |
//!
//! All of the timing decisions live in the daemon.  This module only records
//! which slot gets which events and with what [`Parameters`].

use serde::{Deserialize, Serialize};

use super::condition::{Condition, VariableValue};
use crate::keymap::{ConsumerKeyCode, KeyCode, Modifier, PointingButton};

// ── Inputs ────────────────────────────────────────────────────────────────────

/// One physical input: a keyboard key, a consumer key, or a pointing button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKey {
    KeyCode(KeyCode),
    ConsumerKeyCode(ConsumerKeyCode),
    PointingButton(PointingButton),
}

impl From<KeyCode> for InputKey {
    fn from(key: KeyCode) -> Self {
        InputKey::KeyCode(key)
    }
}

impl From<ConsumerKeyCode> for InputKey {
    fn from(key: ConsumerKeyCode) -> Self {
        InputKey::ConsumerKeyCode(key)
    }
}

impl From<PointingButton> for InputKey {
    fn from(button: PointingButton) -> Self {
        InputKey::PointingButton(button)
    }
}

impl InputKey {
    /// Daemon name of the input, e.g. `caps_lock` or `button4`.
    pub fn name(&self) -> String {
        match self {
            InputKey::KeyCode(k) => k.name().to_string(),
            InputKey::ConsumerKeyCode(c) => c.name().to_string(),
            InputKey::PointingButton(b) => b.to_string(),
        }
    }
}

/// What a manipulator listens for.  Exactly one key appears in the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    KeyCode(KeyCode),
    ConsumerKeyCode(ConsumerKeyCode),
    PointingButton(PointingButton),
    /// A chord: every listed input pressed within the simultaneous threshold.
    Simultaneous(Vec<InputKey>),
}

impl From<InputKey> for Trigger {
    fn from(key: InputKey) -> Self {
        match key {
            InputKey::KeyCode(k) => Trigger::KeyCode(k),
            InputKey::ConsumerKeyCode(c) => Trigger::ConsumerKeyCode(c),
            InputKey::PointingButton(b) => Trigger::PointingButton(b),
        }
    }
}

impl From<KeyCode> for Trigger {
    fn from(key: KeyCode) -> Self {
        Trigger::KeyCode(key)
    }
}

impl From<PointingButton> for Trigger {
    fn from(button: PointingButton) -> Self {
        Trigger::PointingButton(button)
    }
}

impl From<ConsumerKeyCode> for Trigger {
    fn from(key: ConsumerKeyCode) -> Self {
        Trigger::ConsumerKeyCode(key)
    }
}

/// Modifier requirements on the `from` side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromModifiers {
    /// Modifiers that must be held; they are consumed by the match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mandatory: Vec<Modifier>,
    /// Modifiers that may be held and are passed through.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<Modifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    Insensitive,
    Strict,
    StrictInverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyUpWhen {
    Any,
    All,
}

/// Options for [`Trigger::Simultaneous`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimultaneousOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_down_order: Option<KeyOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_up_order: Option<KeyOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_up_when: Option<KeyUpWhen>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_after_key_up: Vec<ToEvent>,
}

/// The `from` block of a manipulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromEvent {
    #[serde(flatten)]
    pub trigger: Trigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<FromModifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simultaneous_options: Option<SimultaneousOptions>,
}

impl FromEvent {
    pub fn new(trigger: impl Into<Trigger>) -> Self {
        Self {
            trigger: trigger.into(),
            modifiers: None,
            simultaneous_options: None,
        }
    }

    /// A chord of several inputs.
    pub fn simultaneous<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<InputKey>,
    {
        Self::new(Trigger::Simultaneous(
            keys.into_iter().map(Into::into).collect(),
        ))
    }

    /// Requires `mods` to be held.
    pub fn mandatory(mut self, mods: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers
            .get_or_insert_with(FromModifiers::default)
            .mandatory
            .extend(mods);
        self
    }

    /// Allows `mods` to be held and passes them through.
    pub fn optional(mut self, mods: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers
            .get_or_insert_with(FromModifiers::default)
            .optional
            .extend(mods);
        self
    }

    pub fn with_simultaneous_options(mut self, options: SimultaneousOptions) -> Self {
        self.simultaneous_options = Some(options);
        self
    }
}

// ── Outputs ───────────────────────────────────────────────────────────────────

/// Payload of a `set_variable` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetVariable {
    pub name: String,
    pub value: VariableValue,
}

/// What a single `to` event does.  Exactly one key appears in the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    KeyCode(KeyCode),
    ConsumerKeyCode(ConsumerKeyCode),
    PointingButton(PointingButton),
    ShellCommand(String),
    SetVariable(SetVariable),
}

/// One event emitted by a manipulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToEvent {
    #[serde(flatten)]
    pub action: Action,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halt: Option<bool>,
}

impl ToEvent {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            modifiers: Vec::new(),
            repeat: None,
            lazy: None,
            halt: None,
        }
    }

    pub fn key(key: KeyCode) -> Self {
        Self::new(Action::KeyCode(key))
    }

    pub fn key_with(key: KeyCode, mods: impl IntoIterator<Item = Modifier>) -> Self {
        Self::key(key).with_modifiers(mods)
    }

    pub fn consumer(key: ConsumerKeyCode) -> Self {
        Self::new(Action::ConsumerKeyCode(key))
    }

    pub fn button(button: PointingButton) -> Self {
        Self::new(Action::PointingButton(button))
    }

    /// Emits the given input, whatever page it lives on.
    pub fn input(key: InputKey) -> Self {
        match key {
            InputKey::KeyCode(k) => Self::key(k),
            InputKey::ConsumerKeyCode(c) => Self::consumer(c),
            InputKey::PointingButton(b) => Self::button(b),
        }
    }

    pub fn shell(command: impl Into<String>) -> Self {
        Self::new(Action::ShellCommand(command.into()))
    }

    pub fn set_variable(name: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        Self::new(Action::SetVariable(SetVariable {
            name: name.into(),
            value: value.into(),
        }))
    }

    pub fn with_modifiers(mut self, mods: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(mods);
        self
    }

    /// Sets `repeat`; `false` stops the daemon from auto-repeating a held key.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn lazy(mut self) -> Self {
        self.lazy = Some(true);
        self
    }
}

/// The two outcomes of a `to_delayed_action`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedAction {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_invoked: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_canceled: Vec<ToEvent>,
}

/// Per-manipulator timing overrides, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(
        rename = "basic.to_if_alone_timeout_milliseconds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub to_if_alone_timeout_ms: Option<u32>,
    #[serde(
        rename = "basic.to_if_held_down_threshold_milliseconds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub to_if_held_down_threshold_ms: Option<u32>,
    #[serde(
        rename = "basic.to_delayed_action_delay_milliseconds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub to_delayed_action_delay_ms: Option<u32>,
    #[serde(
        rename = "basic.simultaneous_threshold_milliseconds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub simultaneous_threshold_ms: Option<u32>,
}

impl Parameters {
    pub fn is_empty(&self) -> bool {
        *self == Parameters::default()
    }

    /// Every value that is set, paired with its JSON key.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, u32)> {
        [
            (
                "basic.to_if_alone_timeout_milliseconds",
                self.to_if_alone_timeout_ms,
            ),
            (
                "basic.to_if_held_down_threshold_milliseconds",
                self.to_if_held_down_threshold_ms,
            ),
            (
                "basic.to_delayed_action_delay_milliseconds",
                self.to_delayed_action_delay_ms,
            ),
            (
                "basic.simultaneous_threshold_milliseconds",
                self.simultaneous_threshold_ms,
            ),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

// ── Manipulator ───────────────────────────────────────────────────────────────

/// Manipulator type.  The daemon only ships `basic` for complex modifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorKind {
    #[default]
    Basic,
}

/// A single trigger → events mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manipulator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ManipulatorKind,
    pub from: FromEvent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_alone: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_if_held_down: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_after_key_up: Vec<ToEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_delayed_action: Option<DelayedAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl Manipulator {
    /// Creates a `basic` manipulator with no outputs.
    pub fn new(from: FromEvent) -> Self {
        Self {
            description: None,
            kind: ManipulatorKind::Basic,
            from,
            to: Vec::new(),
            to_if_alone: Vec::new(),
            to_if_held_down: Vec::new(),
            to_after_key_up: Vec::new(),
            to_delayed_action: None,
            conditions: Vec::new(),
            parameters: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to(mut self, events: impl IntoIterator<Item = ToEvent>) -> Self {
        self.to.extend(events);
        self
    }

    pub fn to_if_alone(mut self, events: impl IntoIterator<Item = ToEvent>) -> Self {
        self.to_if_alone.extend(events);
        self
    }

    pub fn to_if_held_down(mut self, events: impl IntoIterator<Item = ToEvent>) -> Self {
        self.to_if_held_down.extend(events);
        self
    }

    pub fn to_after_key_up(mut self, events: impl IntoIterator<Item = ToEvent>) -> Self {
        self.to_after_key_up.extend(events);
        self
    }

    pub fn to_delayed_action(mut self, delayed: DelayedAction) -> Self {
        self.to_delayed_action = Some(delayed);
        self
    }

    pub fn when(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    /// Attaches timing parameters; an empty set is dropped.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = (!parameters.is_empty()).then_some(parameters);
        self
    }

    /// Returns `true` if at least one emission slot carries an event.
    pub fn emits_anything(&self) -> bool {
        !self.to.is_empty()
            || !self.to_if_alone.is_empty()
            || !self.to_if_held_down.is_empty()
            || !self.to_after_key_up.is_empty()
            || self.to_delayed_action.as_ref().is_some_and(|d| {
                !d.to_if_invoked.is_empty() || !d.to_if_canceled.is_empty()
            })
    }

    /// Iterates over every emitted event across all slots.
    pub fn all_events(&self) -> impl Iterator<Item = &ToEvent> {
        let delayed = self
            .to_delayed_action
            .iter()
            .flat_map(|d| d.to_if_invoked.iter().chain(d.to_if_canceled.iter()));
        self.to
            .iter()
            .chain(self.to_if_alone.iter())
            .chain(self.to_if_held_down.iter())
            .chain(self.to_after_key_up.iter())
            .chain(delayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_key_code_flattens_into_from_block() {
        // Arrange
        let from = FromEvent::new(KeyCode::CapsLock);

        // Act
        let value = serde_json::to_value(&from).unwrap();

        // Assert
        assert_eq!(value, json!({ "key_code": "caps_lock" }));
    }

    #[test]
    fn test_from_with_mandatory_modifiers() {
        let from = FromEvent::new(KeyCode::O).mandatory([Modifier::Any]);
        let value = serde_json::to_value(&from).unwrap();
        assert_eq!(
            value,
            json!({ "key_code": "o", "modifiers": { "mandatory": ["any"] } })
        );
    }

    #[test]
    fn test_simultaneous_lists_each_input_as_object() {
        let from = FromEvent::simultaneous([PointingButton::BACK, PointingButton::FORWARD]);
        let value = serde_json::to_value(&from).unwrap();
        assert_eq!(
            value,
            json!({
                "simultaneous": [
                    { "pointing_button": "button4" },
                    { "pointing_button": "button5" }
                ]
            })
        );
    }

    #[test]
    fn test_to_event_omits_empty_fields() {
        let event = ToEvent::key(KeyCode::Escape);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "key_code": "escape" })
        );
    }

    #[test]
    fn test_to_event_with_repeat_and_modifiers() {
        let event = ToEvent::key_with(KeyCode::Digit5, [Modifier::LeftCommand, Modifier::LeftShift])
            .with_repeat(false);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "key_code": "5",
                "modifiers": ["left_command", "left_shift"],
                "repeat": false
            })
        );
    }

    #[test]
    fn test_set_variable_event_shape() {
        let event = ToEvent::set_variable("hyper_sublayer_o", 1);
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "set_variable": { "name": "hyper_sublayer_o", "value": 1 } })
        );
    }

    #[test]
    fn test_manipulator_serializes_type_basic_and_skips_empty_slots() {
        let m = Manipulator::new(FromEvent::new(KeyCode::A)).to([ToEvent::key(KeyCode::B)]);
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({
                "type": "basic",
                "from": { "key_code": "a" },
                "to": [{ "key_code": "b" }]
            })
        );
    }

    #[test]
    fn test_parameters_use_dotted_keys() {
        let params = Parameters {
            to_if_alone_timeout_ms: Some(200),
            to_delayed_action_delay_ms: Some(250),
            ..Parameters::default()
        };
        assert_eq!(
            serde_json::to_value(params).unwrap(),
            json!({
                "basic.to_if_alone_timeout_milliseconds": 200,
                "basic.to_delayed_action_delay_milliseconds": 250
            })
        );
    }

    #[test]
    fn test_with_empty_parameters_is_dropped() {
        let m = Manipulator::new(FromEvent::new(KeyCode::A)).with_parameters(Parameters::default());
        assert!(m.parameters.is_none());
    }

    #[test]
    fn test_emits_anything_checks_every_slot() {
        let silent = Manipulator::new(FromEvent::new(KeyCode::A));
        assert!(!silent.emits_anything());

        let delayed_only = Manipulator::new(FromEvent::new(KeyCode::A)).to_delayed_action(
            DelayedAction {
                to_if_invoked: vec![ToEvent::key(KeyCode::B)],
                to_if_canceled: vec![],
            },
        );
        assert!(delayed_only.emits_anything());
    }

    #[test]
    fn test_manipulator_deserializes_from_daemon_json() {
        // Arrange: shape produced by hand-written daemon configs
        let json = json!({
            "type": "basic",
            "from": { "consumer_key_code": "eject" },
            "to": [{ "key_code": "5", "modifiers": ["left_command", "left_shift"] }]
        });

        // Act
        let m: Manipulator = serde_json::from_value(json).unwrap();

        // Assert
        assert_eq!(m.from.trigger, Trigger::ConsumerKeyCode(ConsumerKeyCode::Eject));
        assert_eq!(m.to.len(), 1);
        assert_eq!(m.to[0].modifiers, vec![Modifier::LeftCommand, Modifier::LeftShift]);
    }

    #[test]
    fn test_input_key_name_covers_all_pages() {
        assert_eq!(InputKey::from(KeyCode::Quote).name(), "quote");
        assert_eq!(InputKey::from(ConsumerKeyCode::Eject).name(), "eject");
        assert_eq!(InputKey::from(PointingButton::MIDDLE).name(), "button3");
    }
}
