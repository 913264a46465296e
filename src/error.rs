//! Error types for the processing pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by [`Processor::run`](crate::Processor::run).
///
/// Each variant keeps the underlying cause as its `source`, so callers
/// printing the chain (e.g. `anyhow`'s `{:#}`) see the OS error too.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The input file is missing or unreadable.
    #[error("failed to read input file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file (or stdout) could not be written.
    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The result record could not be serialized.
    #[error("failed to serialize result")]
    Serialization(#[from] serde_json::Error),
}

impl ProcessError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from reading input.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Whether this error came from writing output.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProcessError>;
