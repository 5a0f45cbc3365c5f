//! hyper-gen library crate.
//!
//! Builds the personal rule file for the remapping daemon out of
//! `hyper-core` building blocks and writes it to disk.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! hyper-gen (binary)
//!   ├── rules/            The rule tables: Hyper key, mouse, trackball, layers
//!   ├── application/      Assemble the document, write it through a sink
//!   └── infrastructure/
//!         ├── storage/    TOML config file
//!         └── sink        File-system writer
//! ```
//!
//! # Layer rules
//!
//! - `rules` depends on `hyper-core` only.
//! - `application` depends on `rules` and `hyper-core`.
//! - `infrastructure` depends on all other layers plus `toml`.

/// The rule tables.
pub mod rules;

/// Application layer: document assembly and output.
pub mod application;

/// Infrastructure layer: config file and file-system sink.
pub mod infrastructure;
