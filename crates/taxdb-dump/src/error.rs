//! Error types for dump_taxdb
//!
//! Every variant carries the path involved so the message on stderr says which
//! file to look at.

use std::path::PathBuf;
use taxdb_common::TaxdbError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// User-facing error type for the export
#[derive(Error, Debug)]
pub enum CliError {
    /// The taxonomy database could not be opened or parsed
    #[error("Failed to open taxonomy database '{}': {}. Verify the path points to a taxDB file.", .path.display(), .source)]
    Database {
        path: PathBuf,
        #[source]
        source: TaxdbError,
    },

    /// An output file could not be created
    #[error("Cannot create output file '{}': {}. Check that the directory exists and is writable.", .path.display(), .source)]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing an output file failed
    #[error("Failed to write '{}': {}. Check file permissions and disk space.", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A runtime configuration value is invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),
}

impl CliError {
    /// Create a database error
    pub fn database(path: impl Into<PathBuf>, source: TaxdbError) -> Self {
        Self::Database {
            path: path.into(),
            source,
        }
    }

    /// Create an output open error
    pub fn output_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
