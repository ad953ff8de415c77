//! Error type shared by the generator and the validator.
//!
//! Every variant is terminal for the invocation; `main` prints it with the
//! error prefix and exits with status 1.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BasekitError {
    /// Missing or malformed command-line input.
    #[error("{0}")]
    Usage(String),

    /// The component file targeted by `generate` is already on disk.
    #[error("Component {name} already exists! ({})", path.display())]
    ComponentExists { name: String, path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file exists but cannot be parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid file pattern: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No {prefix} components found in {}", dir.display())]
    NoComponents { prefix: String, dir: PathBuf },
}

impl BasekitError {
    /// Wrap an I/O failure with the path it happened on.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        BasekitError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BasekitError>;
