//! BuildDocument: assembles the personal rule set into a daemon document.
//!
//! Rule groups are concatenated in a fixed order because the daemon stops at
//! the first manipulator whose `from` and conditions match:
//!
//! 1. Hyper key
//! 2. Auto-closing brackets and quotes
//! 3. Eject key
//! 4. Mouse buttons (when a mouse is configured)
//! 5. Trackball buttons (when a trackball is configured)
//! 6. Hyper layers
//!
//! The options carry plain domain values; turning a config file into
//! [`RuleSetOptions`] is the infrastructure layer's job.

use hyper_core::layers::{LayerError, Timing};
use hyper_core::{DeviceIdentifier, Document, Global, Profile, Rule};
use thiserror::Error;
use tracing::debug;

use crate::rules::{auto_quotes, hyper_key, hyper_layers, mouse_buttons, relacon};

/// Error type for document assembly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid hyper layer declaration: {0}")]
    Layers(#[from] LayerError),
}

/// Inputs that vary between machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetOptions {
    pub profile_name: String,
    pub show_in_menu_bar: bool,
    /// Multi-button mouse; `None` leaves its rules out.
    pub mouse: Option<DeviceIdentifier>,
    /// Trackball remote; `None` leaves its rules out.
    pub relacon: Option<DeviceIdentifier>,
    pub timing: Timing,
}

impl Default for RuleSetOptions {
    fn default() -> Self {
        Self {
            profile_name: "Default".to_string(),
            show_in_menu_bar: false,
            mouse: Some(DeviceIdentifier::new(5426, 103)),
            relacon: Some(DeviceIdentifier::new(1390, 306)),
            timing: Timing::default(),
        }
    }
}

/// Builds the complete rule list in evaluation order.
///
/// # Errors
///
/// Returns [`BuildError::Layers`] if the Hyper layer table is malformed.
pub fn build_rules(options: &RuleSetOptions) -> Result<Vec<Rule>, BuildError> {
    let mut rules = vec![hyper_key::hyper_key_rule()];
    rules.extend(auto_quotes::auto_quotes_rules());
    rules.push(mouse_buttons::eject_to_screenshot_rule());

    if let Some(mouse) = options.mouse {
        let group = mouse_buttons::mouse_rules(mouse);
        debug!(rules = group.len(), "added mouse rules");
        rules.extend(group);
    }
    if let Some(relacon) = options.relacon {
        let group = relacon::relacon_rules(relacon, &options.timing);
        debug!(rules = group.len(), "added trackball rules");
        rules.extend(group);
    }

    let layers = hyper_layers::hyper_layer_rules()?;
    debug!(rules = layers.len(), "added hyper layer rules");
    rules.extend(layers);

    Ok(rules)
}

/// Builds the single-profile document written to the daemon's config file.
///
/// # Errors
///
/// Propagates [`build_rules`] errors.
pub fn build_document(options: &RuleSetOptions) -> Result<Document, BuildError> {
    let rules = build_rules(options)?;
    let document = Document::single_profile(
        Global {
            show_in_menu_bar: options.show_in_menu_bar,
        },
        Profile::new(options.profile_name.clone(), rules),
    );
    debug!(
        profile = %options.profile_name,
        manipulators = document.manipulator_count(),
        "built document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper_core::validate;

    fn descriptions(rules: &[Rule]) -> Vec<&str> {
        rules.iter().map(|r| r.description.as_str()).collect()
    }

    #[test]
    fn test_default_document_validates() {
        // Arrange
        let options = RuleSetOptions::default();

        // Act
        let doc = build_document(&options).unwrap();

        // Assert
        assert_eq!(validate(&doc), Ok(()));
        assert_eq!(doc.profiles[0].name, "Default");
        assert!(!doc.global.show_in_menu_bar);
    }

    #[test]
    fn test_rule_groups_follow_evaluation_order() {
        let rules = build_rules(&RuleSetOptions::default()).unwrap();
        let d = descriptions(&rules);

        assert_eq!(d[0], "Hyper Key (⌃⌥⇧⌘)");
        assert!(d[1].starts_with("(1/2)"));
        assert!(d[2].starts_with("(2/2)"));
        assert_eq!(d[3], "Eject to Screenshot");

        let first_mouse = d.iter().position(|s| s.starts_with("[BROWSER]")).unwrap();
        let first_relacon = d.iter().position(|s| s.starts_with("[RELACON]")).unwrap();
        let first_layer = d.iter().position(|s| s.starts_with("Hyper Key +")).unwrap();
        assert!(first_mouse < first_relacon);
        assert!(first_relacon < first_layer);
        assert_eq!(d.last(), Some(&"Hyper Key sublayer \"r\""));
    }

    #[test]
    fn test_disabled_devices_are_left_out() {
        // Arrange
        let options = RuleSetOptions {
            mouse: None,
            relacon: None,
            ..RuleSetOptions::default()
        };

        // Act
        let rules = build_rules(&options).unwrap();

        // Assert
        assert!(!descriptions(&rules)
            .iter()
            .any(|d| d.starts_with('[')));
        assert_eq!(rules[3].description, "Eject to Screenshot");
        assert_eq!(rules[4].description, "Hyper Key + 7");
    }

    #[test]
    fn test_profile_settings_are_applied() {
        let options = RuleSetOptions {
            profile_name: "Work".to_string(),
            show_in_menu_bar: true,
            ..RuleSetOptions::default()
        };
        let doc = build_document(&options).unwrap();
        assert_eq!(doc.profiles[0].name, "Work");
        assert!(doc.global.show_in_menu_bar);
    }
}
