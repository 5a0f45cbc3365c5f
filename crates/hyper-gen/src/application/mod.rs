//! Application layer use cases for the generator.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The *application* layer sits between the rule tables in [`crate::rules`]
//! and the infrastructure (config files, the file system).  Use cases here:
//!
//! - **Orchestrate** the rule tables into one document in the order the
//!   daemon needs.
//! - **Depend on abstractions** (the [`generate::ConfigSink`] trait) rather
//!   than on the file system, so tests can observe writes with a mock.
//!
//! # Sub-modules
//!
//! - **`build_document`** – Assembles every enabled rule group into a
//!   single-profile document.
//!
//! - **`generate`** – Writes the rendered document to each output path.

pub mod build_document;
pub mod generate;

pub use build_document::{build_document, BuildError, RuleSetOptions};
pub use generate::{write_outputs, ConfigSink, WriteError};
