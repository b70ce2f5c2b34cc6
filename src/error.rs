//! Error types shared by the library.
//!
//! Per-entry access failures during a walk never show up here: they are
//! skipped where they happen. Only failures the caller has to report make it
//! into [`Error`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration, traversal and output.
#[derive(Debug, Error)]
pub enum Error {
    /// Conflicting or otherwise unusable options. Nothing has been executed.
    #[error("{0}")]
    InvalidArguments(String),

    /// The traversal root does not exist.
    #[error("Path does not exist - {}", .0.display())]
    PathNotFound(PathBuf),

    /// The output file could not be created or written.
    #[error("Cannot create output file - {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON document could not be serialized.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to standard output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
