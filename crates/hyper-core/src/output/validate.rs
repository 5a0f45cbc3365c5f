//! Structural validation of a document before it is written.
//!
//! The daemon silently ignores many malformed entries instead of reporting
//! them, so a typo in a generated rule shows up as "the key does nothing".
//! [`validate`] walks the whole document and reports every problem it finds
//! at once, each with a path such as `profiles[0].rules[3].manipulators[1]`.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::domain::{Action, Document, Manipulator, Parameters, Trigger};

/// A single problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("document has no profiles")]
    NoProfiles,

    #[error("{path}: profile name is blank")]
    BlankProfileName { path: String },

    #[error("{path}: duplicate profile name {name:?}")]
    DuplicateProfileName { path: String, name: String },

    #[error("{path}: rule description is blank")]
    BlankRuleDescription { path: String },

    #[error("{path}: rule has no manipulators")]
    EmptyRule { path: String },

    #[error("{path}: manipulator emits no events")]
    SilentManipulator { path: String },

    #[error("{path}: simultaneous trigger needs at least two keys, found {found}")]
    ShortSimultaneous { path: String, found: usize },

    #[error("{path}: variable name is blank")]
    BlankVariableName { path: String },

    #[error("{path}: {key} must be greater than zero")]
    ZeroParameter { path: String, key: &'static str },
}

/// Every issue found by [`validate`], in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation issue(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

/// Checks `document` and returns every issue found.
pub fn validate(document: &Document) -> Result<(), ValidationReport> {
    let mut issues = Vec::new();

    if document.profiles.is_empty() {
        issues.push(ValidationIssue::NoProfiles);
    }

    let mut seen_names = HashSet::new();
    for (p, profile) in document.profiles.iter().enumerate() {
        let path = format!("profiles[{p}]");

        if profile.name.trim().is_empty() {
            issues.push(ValidationIssue::BlankProfileName { path: path.clone() });
        } else if !seen_names.insert(profile.name.as_str()) {
            issues.push(ValidationIssue::DuplicateProfileName {
                path: path.clone(),
                name: profile.name.clone(),
            });
        }

        let modifications = &profile.complex_modifications;
        if let Some(parameters) = &modifications.parameters {
            check_parameters(&format!("{path}.parameters"), parameters, &mut issues);
        }

        for (r, rule) in modifications.rules.iter().enumerate() {
            let rule_path = format!("{path}.rules[{r}]");
            if rule.description.trim().is_empty() {
                issues.push(ValidationIssue::BlankRuleDescription {
                    path: rule_path.clone(),
                });
            }
            if rule.manipulators.is_empty() {
                issues.push(ValidationIssue::EmptyRule {
                    path: rule_path.clone(),
                });
            }
            for (m, manipulator) in rule.manipulators.iter().enumerate() {
                check_manipulator(
                    &format!("{rule_path}.manipulators[{m}]"),
                    manipulator,
                    &mut issues,
                );
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport { issues })
    }
}

fn check_manipulator(path: &str, manipulator: &Manipulator, issues: &mut Vec<ValidationIssue>) {
    if !manipulator.emits_anything() {
        issues.push(ValidationIssue::SilentManipulator {
            path: path.to_string(),
        });
    }

    if let Trigger::Simultaneous(keys) = &manipulator.from.trigger {
        if keys.len() < 2 {
            issues.push(ValidationIssue::ShortSimultaneous {
                path: format!("{path}.from"),
                found: keys.len(),
            });
        }
    }

    for (c, condition) in manipulator.conditions.iter().enumerate() {
        if let Some(name) = condition.variable_name() {
            if name.trim().is_empty() {
                issues.push(ValidationIssue::BlankVariableName {
                    path: format!("{path}.conditions[{c}]"),
                });
            }
        }
    }

    let blank_set_variable = manipulator.all_events().any(|event| {
        matches!(&event.action, Action::SetVariable(set) if set.name.trim().is_empty())
    });
    if blank_set_variable {
        issues.push(ValidationIssue::BlankVariableName {
            path: path.to_string(),
        });
    }

    if let Some(parameters) = &manipulator.parameters {
        check_parameters(&format!("{path}.parameters"), parameters, issues);
    }
}

fn check_parameters(path: &str, parameters: &Parameters, issues: &mut Vec<ValidationIssue>) {
    for (key, value) in parameters.values() {
        if value == 0 {
            issues.push(ValidationIssue::ZeroParameter {
                path: path.to_string(),
                key,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        FromEvent, Global, InputKey, Manipulator, Profile, Rule, ToEvent, Trigger,
    };
    use crate::keymap::{KeyCode, PointingButton};
    use crate::layers::variable_if;

    fn doc_with(rules: Vec<Rule>) -> Document {
        Document::single_profile(Global::default(), Profile::new("Default", rules))
    }

    fn simple() -> Manipulator {
        Manipulator::new(FromEvent::new(KeyCode::A)).to([ToEvent::key(KeyCode::B)])
    }

    #[test]
    fn test_valid_document_passes() {
        let doc = doc_with(vec![Rule::new("A to B", vec![simple()])]);
        assert_eq!(validate(&doc), Ok(()));
    }

    #[test]
    fn test_no_profiles_is_reported() {
        let doc = Document {
            global: Global::default(),
            profiles: vec![],
        };
        let report = validate(&doc).unwrap_err();
        assert_eq!(report.issues, vec![ValidationIssue::NoProfiles]);
    }

    #[test]
    fn test_duplicate_and_blank_profile_names() {
        // Arrange
        let doc = Document {
            global: Global::default(),
            profiles: vec![
                Profile::new("Default", vec![]),
                Profile::new("Default", vec![]),
                Profile::new("  ", vec![]),
            ],
        };

        // Act
        let report = validate(&doc).unwrap_err();

        // Assert
        assert_eq!(
            report.issues,
            vec![
                ValidationIssue::DuplicateProfileName {
                    path: "profiles[1]".to_string(),
                    name: "Default".to_string(),
                },
                ValidationIssue::BlankProfileName {
                    path: "profiles[2]".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_collects_every_issue_in_document_order() {
        // Arrange
        let silent = Manipulator::new(FromEvent::new(KeyCode::A));
        let short_chord = Manipulator::new(FromEvent::new(Trigger::Simultaneous(vec![
            InputKey::from(PointingButton::BACK),
        ])))
        .to([ToEvent::key(KeyCode::B)]);
        let doc = doc_with(vec![
            Rule::new("", vec![silent]),
            Rule::new("Empty", vec![]),
            Rule::new("Chord", vec![short_chord]),
        ]);

        // Act
        let report = validate(&doc).unwrap_err();

        // Assert
        assert_eq!(
            report.issues,
            vec![
                ValidationIssue::BlankRuleDescription {
                    path: "profiles[0].rules[0]".to_string(),
                },
                ValidationIssue::SilentManipulator {
                    path: "profiles[0].rules[0].manipulators[0]".to_string(),
                },
                ValidationIssue::EmptyRule {
                    path: "profiles[0].rules[1]".to_string(),
                },
                ValidationIssue::ShortSimultaneous {
                    path: "profiles[0].rules[2].manipulators[0].from".to_string(),
                    found: 1,
                },
            ]
        );
    }

    #[test]
    fn test_blank_variable_names_in_conditions_and_events() {
        let m = simple()
            .to([ToEvent::set_variable("", 1)])
            .when([variable_if(" ", 1)]);
        let report = validate(&doc_with(vec![Rule::new("Vars", vec![m])])).unwrap_err();
        assert_eq!(
            report.issues,
            vec![
                ValidationIssue::BlankVariableName {
                    path: "profiles[0].rules[0].manipulators[0].conditions[0]".to_string(),
                },
                ValidationIssue::BlankVariableName {
                    path: "profiles[0].rules[0].manipulators[0]".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_zero_timing_parameter_is_reported() {
        let m = simple().with_parameters(Parameters {
            to_if_alone_timeout_ms: Some(0),
            to_delayed_action_delay_ms: Some(250),
            ..Parameters::default()
        });
        let report = validate(&doc_with(vec![Rule::new("Timing", vec![m])])).unwrap_err();
        assert_eq!(
            report.issues,
            vec![ValidationIssue::ZeroParameter {
                path: "profiles[0].rules[0].manipulators[0].parameters".to_string(),
                key: "basic.to_if_alone_timeout_milliseconds",
            }]
        );
    }

    #[test]
    fn test_report_display_lists_each_issue() {
        let report = ValidationReport {
            issues: vec![
                ValidationIssue::NoProfiles,
                ValidationIssue::EmptyRule {
                    path: "profiles[0].rules[0]".to_string(),
                },
            ],
        };
        assert_eq!(
            report.to_string(),
            "2 validation issue(s)\n  - document has no profiles\n  - profiles[0].rules[0]: rule has no manipulators"
        );
    }
}
