//! Generate: writes rendered output through a [`ConfigSink`].
//!
//! The use case never touches the file system itself.  The binary injects
//! [`crate::infrastructure::sink::FsSink`]; tests inject a mock.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Error type for output writes.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for generated files.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSink {
    /// Replaces the contents of `path` with `contents`.
    fn write(&self, path: &Path, contents: &str) -> Result<(), WriteError>;
}

/// Writes `contents` to every path in order, stopping at the first failure.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns the sink's [`WriteError`] for the first path that fails.
pub fn write_outputs<S: ConfigSink + ?Sized>(
    sink: &S,
    paths: &[PathBuf],
    contents: &str,
) -> Result<usize, WriteError> {
    for path in paths {
        sink.write(path, contents)?;
        info!(path = %path.display(), bytes = contents.len(), "wrote output");
    }
    Ok(paths.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn test_writes_every_path_in_order() {
        // Arrange
        let mut sink = MockConfigSink::new();
        let mut seq = Sequence::new();
        sink.expect_write()
            .with(eq(Path::new("a.json")), eq("{}"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        sink.expect_write()
            .with(eq(Path::new("b.json")), eq("{}"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let paths = vec![PathBuf::from("a.json"), PathBuf::from("b.json")];

        // Act
        let written = write_outputs(&sink, &paths, "{}").unwrap();

        // Assert
        assert_eq!(written, 2);
    }

    #[test]
    fn test_stops_at_first_failure() {
        // Arrange
        let mut sink = MockConfigSink::new();
        sink.expect_write()
            .with(eq(Path::new("bad.json")), eq("{}"))
            .times(1)
            .returning(|path, _| {
                Err(WriteError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                })
            });
        let paths = vec![PathBuf::from("bad.json"), PathBuf::from("never.json")];

        // Act
        let result = write_outputs(&sink, &paths, "{}");

        // Assert: the second path was never attempted
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("failed to write bad.json"));
    }

    #[test]
    fn test_no_paths_writes_nothing() {
        let sink = MockConfigSink::new();
        assert_eq!(write_outputs(&sink, &[], "{}").unwrap(), 0);
    }
}
