//! Persistent storage: the generator's TOML configuration file.

pub mod config;
