//! Error types for vitals operations.
//!
//! This module defines [`VitalsError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are never errors: every probe catches its own failures
//!   at the origin and reports a boolean plus a logged category string
//! - `VitalsError` covers the genuine failures — the reporter being unable
//!   to create or write its output files
//! - Use `anyhow::Error` (via `VitalsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vitals operations.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// The log directory could not be created.
    #[error("Failed to create log directory {path}: {source}")]
    LogDirCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file could not be opened or written.
    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vitals operations.
pub type Result<T> = std::result::Result<T, VitalsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_create_displays_path() {
        let err = VitalsError::LogDirCreate {
            path: PathBuf::from("/workspace/logs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/workspace/logs"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn output_write_displays_path_and_source() {
        let err = VitalsError::OutputWrite {
            path: PathBuf::from("/workspace/logs/DEVCONTAINER_STATUS.txt"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("DEVCONTAINER_STATUS.txt"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VitalsError = io_err.into();
        assert!(matches!(err, VitalsError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(VitalsError::LogDirCreate {
                path: PathBuf::from("/x"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "test"),
            })
        }
        assert!(returns_error().is_err());
    }
}
