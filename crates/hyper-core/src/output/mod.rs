//! Turning a [`Document`](crate::domain::Document) into the file the daemon
//! reads.
//!
//! - **`json`**     – pretty-printed JSON rendering.
//! - **`validate`** – structural checks the type system cannot express
//!   (non-empty lists, distinct profile names, positive timings).

pub mod json;
pub mod validate;

pub use json::{render, OutputError};
pub use validate::{validate, ValidationIssue, ValidationReport};
