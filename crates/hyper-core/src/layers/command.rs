//! Shorthand commands bound to layer keys.

use crate::domain::{Condition, FromEvent, Manipulator, ToEvent};
use crate::keymap::{KeyCode, Modifier};

/// What pressing a layer key does: a list of events plus optional metadata.
///
/// A key can carry several commands with different conditions; the daemon
/// tries them in order and the first whose conditions hold wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerCommand {
    pub to: Vec<ToEvent>,
    pub description: Option<String>,
    pub conditions: Vec<Condition>,
}

impl LayerCommand {
    pub fn new(to: impl IntoIterator<Item = ToEvent>) -> Self {
        Self {
            to: to.into_iter().collect(),
            description: None,
            conditions: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a condition that must also hold for this command to fire.
    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Expands into a manipulator for `from`; `leading` conditions go first.
    pub fn into_manipulator(self, from: FromEvent, leading: &[Condition]) -> Manipulator {
        let mut manipulator = Manipulator::new(from)
            .to(self.to)
            .when(leading.iter().cloned())
            .when(self.conditions);
        manipulator.description = self.description;
        manipulator
    }
}

/// Runs `open <what>` through the shell.
///
/// `what` is passed verbatim, so it can be a URL, a custom scheme such as
/// `raycast://...`, or flags like `-a 'Finder.app'`.
pub fn open(what: &str) -> LayerCommand {
    LayerCommand::new([ToEvent::shell(format!("open {what}"))]).describe(format!("Open {what}"))
}

/// Opens (or focuses) an application bundle by name.
pub fn app(name: &str) -> LayerCommand {
    open(&format!("-a '{name}.app'"))
}

/// Runs an arbitrary shell command.
pub fn shell(command: impl Into<String>) -> LayerCommand {
    LayerCommand::new([ToEvent::shell(command)])
}

/// Emits a single key.
pub fn key(key: KeyCode) -> LayerCommand {
    LayerCommand::new([ToEvent::key(key)])
}

/// Emits a single key with modifiers held.
pub fn key_with(key: KeyCode, mods: impl IntoIterator<Item = Modifier>) -> LayerCommand {
    LayerCommand::new([ToEvent::key_with(key, mods)])
}
