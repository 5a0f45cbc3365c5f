//! File-system implementation of [`ConfigSink`].

use std::path::Path;

use crate::application::{ConfigSink, WriteError};

/// Writes files to disk, creating missing parent directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl ConfigSink for FsSink {
    fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError> {
        // Ensure directory exists before writing.
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| WriteError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, contents).map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
