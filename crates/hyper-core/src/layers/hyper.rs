//! Hyper key sublayers.
//!
//! The "Hyper" key is a chord of all four modifiers of one side (⌃⌥⇧⌘).  No
//! application binds that chord, so Hyper + key is free for personal use.
//!
//! # Sublayers (for beginners)
//!
//! A sublayer adds a second level: Hyper + O enters the "open" layer, and
//! while O is still held, G opens the browser.  The daemon has no built-in
//! notion of layers, so each one is emulated with a variable:
//!
//! ```text
//! Hyper + O down   ──►  set hyper_sublayer_o = 1
//! G down (any mods) with hyper_sublayer_o == 1  ──►  run the G command
//! O up             ──►  set hyper_sublayer_o = 0
//! ```
//!
//! The toggle manipulator of each sublayer only fires while every *other*
//! sublayer variable on the same side is 0.  That keeps layers exclusive and
//! lets a sublayer bind a key that is itself a sublayer key (Hyper + O, then
//! W, even though Hyper + W is also a layer).

use thiserror::Error;
use tracing::{debug, warn};

use super::command::LayerCommand;
use super::conditions::variable_if;
use crate::domain::{Condition, FromEvent, Manipulator, Rule, ToEvent};
use crate::keymap::{KeyCode, Modifier, HYPER_LEFT, HYPER_RIGHT};

/// Errors detected while expanding layer shorthand.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerError {
    /// The same Hyper + key was declared twice on one side.
    #[error("{side} + {key} is declared more than once")]
    DuplicateLayerKey { side: &'static str, key: KeyCode },

    /// A sublayer binds the same key twice.
    #[error("sublayer \"{layer}\" binds {key} more than once")]
    DuplicateBinding { layer: KeyCode, key: KeyCode },

    /// A sublayer has no bindings at all.
    #[error("sublayer \"{0}\" has no bindings")]
    EmptySublayer(KeyCode),

    /// A direct Hyper + key entry has no commands.
    #[error("{side} + {key} has no commands")]
    EmptyEntry { side: &'static str, key: KeyCode },
}

/// Which hand's modifiers form the Hyper chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyperSide {
    Left,
    Right,
}

impl HyperSide {
    /// The four modifiers that must be held.
    pub fn modifiers(self) -> [Modifier; 4] {
        match self {
            HyperSide::Left => HYPER_LEFT,
            HyperSide::Right => HYPER_RIGHT,
        }
    }

    /// Label used in rule descriptions, e.g. `Hyper Key + 7`.
    pub fn label(self) -> &'static str {
        match self {
            HyperSide::Left => "Hyper Key",
            HyperSide::Right => "Right Hyper Key",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            HyperSide::Left => "Hyper",
            HyperSide::Right => "Right Hyper",
        }
    }

    /// Name of the variable that tracks whether `key`'s sublayer is active.
    ///
    /// Each side uses its own prefix so a left and a right sublayer on the
    /// same key never share state.
    pub fn variable_name(self, key: KeyCode) -> String {
        match self {
            HyperSide::Left => format!("hyper_sublayer_{key}"),
            HyperSide::Right => format!("right_hyper_sublayer_{key}"),
        }
    }

    fn from_event(self, key: KeyCode) -> FromEvent {
        FromEvent::new(key).mandatory(self.modifiers())
    }
}

/// Key bindings active while a sublayer is held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sublayer {
    bindings: Vec<(KeyCode, Vec<LayerCommand>)>,
}

impl Sublayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to a single command.
    pub fn bind(self, key: KeyCode, command: LayerCommand) -> Self {
        self.bind_all(key, vec![command])
    }

    /// Binds `key` to several conditional commands; the first match wins.
    pub fn bind_all(mut self, key: KeyCode, commands: Vec<LayerCommand>) -> Self {
        self.bindings.push((key, commands));
        self
    }

    pub fn bindings(&self) -> &[(KeyCode, Vec<LayerCommand>)] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// One Hyper + key declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HyperEntry {
    /// Hyper + key runs a command directly.
    Direct(Vec<LayerCommand>),
    /// Hyper + key enters a sublayer.
    Sublayer(Sublayer),
}

/// Expands one sublayer into its toggle manipulator followed by one
/// manipulator per bound command.
///
/// `all_sublayer_variables` lists every sublayer variable on `side`,
/// including this layer's own; the toggle is conditioned on all the others
/// being 0.
///
/// # Errors
///
/// Returns [`LayerError::EmptySublayer`] for a sublayer without bindings and
/// [`LayerError::DuplicateBinding`] when a key is bound twice.
pub fn create_hyper_sub_layer(
    side: HyperSide,
    sublayer_key: KeyCode,
    sublayer: &Sublayer,
    all_sublayer_variables: &[String],
) -> Result<Vec<Manipulator>, LayerError> {
    if sublayer.is_empty() {
        return Err(LayerError::EmptySublayer(sublayer_key));
    }

    let variable = side.variable_name(sublayer_key);

    let exclusive: Vec<Condition> = all_sublayer_variables
        .iter()
        .filter(|other| **other != variable)
        .map(|other| variable_if(other.as_str(), 0))
        .collect();

    let toggle = Manipulator::new(side.from_event(sublayer_key))
        .describe(format!(
            "Toggle {} sublayer {sublayer_key}",
            side.toggle_label()
        ))
        .to([ToEvent::set_variable(variable.as_str(), 1)])
        .to_after_key_up([ToEvent::set_variable(variable.as_str(), 0)])
        .when(exclusive);

    let active = [variable_if(variable.as_str(), 1)];
    let mut manipulators = vec![toggle];
    let mut seen: Vec<KeyCode> = Vec::with_capacity(sublayer.bindings.len());

    for (key, commands) in &sublayer.bindings {
        if seen.contains(key) {
            return Err(LayerError::DuplicateBinding {
                layer: sublayer_key,
                key: *key,
            });
        }
        seen.push(*key);

        for command in commands {
            let from = FromEvent::new(*key).mandatory([Modifier::Any]);
            manipulators.push(command.clone().into_manipulator(from, &active));
        }
    }

    Ok(manipulators)
}

/// A sublayer binding that can never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowedBinding {
    pub sublayer: KeyCode,
    pub key: KeyCode,
}

/// Finds sublayer bindings hidden behind a direct entry.
///
/// Hyper is still held while a sublayer is active, so an unconditional direct
/// Hyper + key declared before the sublayer matches first and the sublayer's
/// binding for the same key is unreachable.
pub fn shadowed_bindings(entries: &[(KeyCode, HyperEntry)]) -> Vec<ShadowedBinding> {
    let mut shadowed = Vec::new();
    for (i, (sublayer_key, entry)) in entries.iter().enumerate() {
        let HyperEntry::Sublayer(sublayer) = entry else {
            continue;
        };
        for (key, _) in sublayer.bindings() {
            let covered = entries[..i].iter().any(|(direct_key, earlier)| {
                direct_key == key
                    && matches!(earlier, HyperEntry::Direct(commands)
                        if commands.iter().any(|c| c.conditions.is_empty()))
            });
            if covered {
                shadowed.push(ShadowedBinding {
                    sublayer: *sublayer_key,
                    key: *key,
                });
            }
        }
    }
    shadowed
}

/// Expands every Hyper + key declaration of one side into rules.
///
/// Declaration order is preserved, one rule per entry.  This has to see the
/// whole set at once because each sublayer toggle needs the variable names of
/// all its siblings.
///
/// # Errors
///
/// Returns [`LayerError::DuplicateLayerKey`] if a key is declared twice, and
/// propagates errors from [`create_hyper_sub_layer`].
pub fn create_hyper_sub_layers(
    side: HyperSide,
    entries: &[(KeyCode, HyperEntry)],
) -> Result<Vec<Rule>, LayerError> {
    for (i, (key, _)) in entries.iter().enumerate() {
        if entries[..i].iter().any(|(earlier, _)| earlier == key) {
            return Err(LayerError::DuplicateLayerKey {
                side: side.label(),
                key: *key,
            });
        }
    }

    for s in shadowed_bindings(entries) {
        warn!(
            side = side.label(),
            sublayer = %s.sublayer,
            key = %s.key,
            "sublayer binding is shadowed by an earlier direct entry"
        );
    }

    let all_sublayer_variables: Vec<String> = entries
        .iter()
        .filter(|(_, entry)| matches!(entry, HyperEntry::Sublayer(_)))
        .map(|(key, _)| side.variable_name(*key))
        .collect();

    entries
        .iter()
        .map(|(key, entry)| {
            let rule = match entry {
                HyperEntry::Direct(commands) => {
                    if commands.is_empty() {
                        return Err(LayerError::EmptyEntry {
                            side: side.label(),
                            key: *key,
                        });
                    }
                    let manipulators = commands
                        .iter()
                        .map(|c| c.clone().into_manipulator(side.from_event(*key), &[]))
                        .collect();
                    Rule::new(format!("{} + {key}", side.label()), manipulators)
                }
                HyperEntry::Sublayer(sublayer) => Rule::new(
                    format!("{} sublayer \"{key}\"", side.label()),
                    create_hyper_sub_layer(side, *key, sublayer, &all_sublayer_variables)?,
                ),
            };
            debug!(
                rule = %rule.description,
                manipulators = rule.manipulators.len(),
                "expanded hyper entry"
            );
            Ok(rule)
        })
        .collect()
}

/// Fluent front end for [`create_hyper_sub_layers`].
///
/// ```rust
/// use hyper_core::keymap::KeyCode;
/// use hyper_core::layers::{app, key, HyperLayers, HyperSide};
///
/// let rules = HyperLayers::new(HyperSide::Left)
///     .direct(KeyCode::Digit7, key(KeyCode::UpArrow))
///     .sublayer(KeyCode::O, |l| l.bind(KeyCode::G, app("Google Chrome")))
///     .build()
///     .unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HyperLayers {
    side: HyperSide,
    entries: Vec<(KeyCode, HyperEntry)>,
}

impl HyperLayers {
    pub fn new(side: HyperSide) -> Self {
        Self {
            side,
            entries: Vec::new(),
        }
    }

    /// Hyper + `key` runs `command`.
    pub fn direct(self, key: KeyCode, command: LayerCommand) -> Self {
        self.direct_all(key, vec![command])
    }

    /// Hyper + `key` runs the first of `commands` whose conditions hold.
    pub fn direct_all(mut self, key: KeyCode, commands: Vec<LayerCommand>) -> Self {
        self.entries.push((key, HyperEntry::Direct(commands)));
        self
    }

    /// Hyper + `key` enters the sublayer configured by `configure`.
    pub fn sublayer(mut self, key: KeyCode, configure: impl FnOnce(Sublayer) -> Sublayer) -> Self {
        self.entries
            .push((key, HyperEntry::Sublayer(configure(Sublayer::new()))));
        self
    }

    pub fn entries(&self) -> &[(KeyCode, HyperEntry)] {
        &self.entries
    }

    /// See [`shadowed_bindings`].
    pub fn shadowed_bindings(&self) -> Vec<ShadowedBinding> {
        shadowed_bindings(&self.entries)
    }

    /// Expands every entry into rules.
    ///
    /// # Errors
    ///
    /// See [`create_hyper_sub_layers`].
    pub fn build(&self) -> Result<Vec<Rule>, LayerError> {
        create_hyper_sub_layers(self.side, &self.entries)
    }
}
