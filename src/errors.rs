//! Error types for gitree.

use std::path::PathBuf;

/// Fatal errors. Per-entry problems during traversal are reported as
/// warnings on stderr and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum GitreeError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
