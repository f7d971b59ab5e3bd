//! Error types for subpanel.
//!
//! Rendering and panel logic are total and never fail; the only fallible
//! step is loading a catalog file. [`PanelError`] covers that boundary.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use subpanel::error::PanelError;
//!
//! let err = PanelError::unsupported_format(Path::new("catalog.yaml"));
//! assert!(err.to_string().contains("catalog.yaml"));
//! assert!(!err.is_not_found());
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using `PanelError`.
pub type PanelResult<T> = Result<T, PanelError>;

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The catalog file was read but is not valid JSON/TOML.
    #[error("failed to parse catalog {}: {message}", .path.display())]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The catalog file extension is neither `.json` nor `.toml`.
    #[error("unsupported catalog format: {} (expected .json or .toml)", .path.display())]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },
}

impl PanelError {
    /// Creates an I/O error for `path`.
    #[must_use]
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for `path`.
    #[must_use]
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Creates an unsupported-format error for `path`.
    #[must_use]
    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }

    /// Returns true if the catalog file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
