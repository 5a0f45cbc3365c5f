//! Constructors for the conditions rules use most often.

use crate::domain::{Condition, DeviceIdentifier, VariableValue};

/// True while one of the given applications is frontmost.
///
/// Identifiers are regular expressions matched against bundle IDs.
pub fn frontmost_app_if<I, S>(bundle_identifiers: I) -> Condition
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Condition::FrontmostApplicationIf {
        bundle_identifiers: bundle_identifiers.into_iter().map(Into::into).collect(),
    }
}

/// True while none of the given applications is frontmost.
pub fn frontmost_app_unless<I, S>(bundle_identifiers: I) -> Condition
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Condition::FrontmostApplicationUnless {
        bundle_identifiers: bundle_identifiers.into_iter().map(Into::into).collect(),
    }
}

/// True only for events coming from `device`.
pub fn device_if(device: DeviceIdentifier) -> Condition {
    Condition::DeviceIf {
        identifiers: vec![device],
    }
}

pub fn variable_if(name: impl Into<String>, value: impl Into<VariableValue>) -> Condition {
    Condition::VariableIf {
        name: name.into(),
        value: value.into(),
    }
}

pub fn variable_unless(name: impl Into<String>, value: impl Into<VariableValue>) -> Condition {
    Condition::VariableUnless {
        name: name.into(),
        value: value.into(),
    }
}
