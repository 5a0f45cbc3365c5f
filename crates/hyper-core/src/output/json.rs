//! JSON rendering.

use thiserror::Error;

use crate::domain::Document;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders `document` as JSON indented with two spaces.
///
/// No trailing newline is appended; writers decide whether to add one.
pub fn render(document: &Document) -> Result<String, OutputError> {
    let json = serde_json::to_string_pretty(document)?;
    tracing::debug!(
        bytes = json.len(),
        manipulators = document.manipulator_count(),
        "rendered document"
    );
    Ok(json)
}
