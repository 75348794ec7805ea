//! Runtime configuration for dump_taxdb
//!
//! Settings come from the environment (optionally via a `.env` file loaded in
//! `main`). Command-line arguments only carry the three paths.

use crate::error::{CliError, Result};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default capacity of each output buffer, in bytes.
pub const DEFAULT_WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Environment variable overriding [`DEFAULT_WRITE_BUFFER_SIZE`].
pub const WRITE_BUFFER_SIZE_ENV: &str = "TAXDB_DUMP_BUFFER_SIZE";

/// Export configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Capacity of the names and nodes `BufWriter`s
    pub write_buffer_size: usize,
}

impl DumpConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self {
            write_buffer_size: DEFAULT_WRITE_BUFFER_SIZE,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(size) = std::env::var(WRITE_BUFFER_SIZE_ENV) {
            config.write_buffer_size = parse_buffer_size(&size)?;
        }

        Ok(config)
    }

    /// Get the output buffer capacity
    pub fn write_buffer_size(&self) -> usize {
        self.write_buffer_size
    }

    /// Set the output buffer capacity
    pub fn set_write_buffer_size(&mut self, size: usize) {
        self.write_buffer_size = size;
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_buffer_size(raw: &str) -> Result<usize> {
    let size: usize = raw.trim().parse().map_err(|_| {
        CliError::config(format!("{} must be a positive integer, got '{}'", WRITE_BUFFER_SIZE_ENV, raw))
    })?;

    if size == 0 {
        return Err(CliError::config(format!("{} must be greater than zero", WRITE_BUFFER_SIZE_ENV)));
    }

    Ok(size)
}
