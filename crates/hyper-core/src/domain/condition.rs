//! Manipulator activation conditions.
//!
//! A manipulator only fires when *all* of its conditions hold.  The daemon
//! evaluates them at runtime; here they are plain data tagged by `"type"`.

use serde::{Deserialize, Serialize};

/// Value stored in, or compared against, a daemon variable.
///
/// Variables default to `0` inside the daemon, which is why every layer in
/// this crate uses `0` for "off" and `1` for "on": a condition on `0` is true
/// right after the daemon starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        VariableValue::Int(value)
    }
}

impl From<i32> for VariableValue {
    fn from(value: i32) -> Self {
        VariableValue::Int(i64::from(value))
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        VariableValue::Bool(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Text(value.to_string())
    }
}

/// USB vendor/product pair identifying one physical device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceIdentifier {
    pub vendor_id: u32,
    pub product_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_keyboard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pointing_device: Option<bool>,
}

impl DeviceIdentifier {
    pub fn new(vendor_id: u32, product_id: u32) -> Self {
        Self {
            vendor_id,
            product_id,
            is_keyboard: None,
            is_pointing_device: None,
        }
    }
}

/// One entry of a manipulator's `conditions` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    VariableIf {
        name: String,
        value: VariableValue,
    },
    VariableUnless {
        name: String,
        value: VariableValue,
    },
    /// Bundle identifiers are regular expressions, e.g. `^com\.apple\.Safari$`.
    FrontmostApplicationIf {
        bundle_identifiers: Vec<String>,
    },
    FrontmostApplicationUnless {
        bundle_identifiers: Vec<String>,
    },
    DeviceIf {
        identifiers: Vec<DeviceIdentifier>,
    },
    DeviceUnless {
        identifiers: Vec<DeviceIdentifier>,
    },
}

impl Condition {
    /// Returns the variable name for `variable_if` / `variable_unless`.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Condition::VariableIf { name, .. } | Condition::VariableUnless { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variable_if_serializes_with_type_tag() {
        // Arrange
        let cond = Condition::VariableIf {
            name: "hyper_sublayer_o".to_string(),
            value: 1.into(),
        };

        // Act
        let value = serde_json::to_value(&cond).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({ "type": "variable_if", "name": "hyper_sublayer_o", "value": 1 })
        );
    }

    #[test]
    fn test_device_if_omits_unset_flags() {
        let cond = Condition::DeviceIf {
            identifiers: vec![DeviceIdentifier::new(5426, 103)],
        };
        let value = serde_json::to_value(&cond).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "device_if",
                "identifiers": [{ "vendor_id": 5426, "product_id": 103 }]
            })
        );
    }

    #[test]
    fn test_variable_values_deserialize_by_shape() {
        let int: VariableValue = serde_json::from_str("0").unwrap();
        let boolean: VariableValue = serde_json::from_str("true").unwrap();
        let text: VariableValue = serde_json::from_str("\"on\"").unwrap();
        assert_eq!(int, VariableValue::Int(0));
        assert_eq!(boolean, VariableValue::Bool(true));
        assert_eq!(text, VariableValue::Text("on".to_string()));
    }

    #[test]
    fn test_frontmost_application_round_trips() {
        let json = r#"{"type":"frontmost_application_unless","bundle_identifiers":["^com\\.apple\\.Safari$"]}"#;
        let cond: Condition = serde_json::from_str(json).unwrap();
        assert_eq!(
            cond,
            Condition::FrontmostApplicationUnless {
                bundle_identifiers: vec![r"^com\.apple\.Safari$".to_string()],
            }
        );
    }

    #[test]
    fn test_variable_name_only_for_variable_conditions() {
        let var = Condition::VariableUnless {
            name: "relacon_b2".to_string(),
            value: 1.into(),
        };
        let app = Condition::FrontmostApplicationIf {
            bundle_identifiers: vec![],
        };
        assert_eq!(var.variable_name(), Some("relacon_b2"));
        assert_eq!(app.variable_name(), None);
    }
}
