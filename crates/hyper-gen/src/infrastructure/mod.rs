//! Infrastructure layer for the generator.
//!
//! Contains the file-facing adapters: TOML config loading and the
//! file-system output sink.
//!
//! **Dependency rule**: this layer may depend on `application`, `rules` and
//! `hyper_core`, but MUST NOT be imported by the `application` layer.

pub mod sink;
pub mod storage;
