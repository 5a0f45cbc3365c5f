//! Top-level configuration document written for the daemon.
//!
//! ```text
//! Document
//!  ├─ global { show_in_menu_bar }
//!  └─ profiles[]
//!       └─ complex_modifications
//!            ├─ parameters   (profile-wide timing defaults, optional)
//!            └─ rules[]
//!                 └─ manipulators[]
//! ```

use serde::{Deserialize, Serialize};

use super::manipulator::{Manipulator, Parameters};

/// A named group of manipulators, shown as one line in the daemon's UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub description: String,
    pub manipulators: Vec<Manipulator>,
}

impl Rule {
    pub fn new(description: impl Into<String>, manipulators: Vec<Manipulator>) -> Self {
        Self {
            description: description.into(),
            manipulators,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexModifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default)]
    pub complex_modifications: ComplexModifications,
}

impl Profile {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            selected: None,
            complex_modifications: ComplexModifications {
                parameters: None,
                rules,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Global {
    #[serde(default = "default_true")]
    pub show_in_menu_bar: bool,
}

impl Default for Global {
    fn default() -> Self {
        Self {
            show_in_menu_bar: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// The whole file the daemon loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub global: Global,
    pub profiles: Vec<Profile>,
}

impl Document {
    /// Creates a document holding a single profile.
    pub fn single_profile(global: Global, profile: Profile) -> Self {
        Self {
            global,
            profiles: vec![profile],
        }
    }

    /// Total number of manipulators across every profile.
    pub fn manipulator_count(&self) -> usize {
        self.profiles
            .iter()
            .flat_map(|p| p.complex_modifications.rules.iter())
            .map(|r| r.manipulators.len())
            .sum()
    }
}
