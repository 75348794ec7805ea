//! Error types for taxdb

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for taxdb operations
pub type Result<T> = std::result::Result<T, TaxdbError>;

/// Main error type for taxdb
#[derive(Error, Debug)]
pub enum TaxdbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Taxonomy database not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaxdbError {
    /// Create a parse error for the given 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = TaxdbError::parse(12, "expected 4 columns, got 2");
        assert_eq!(err.to_string(), "Parse error at line 12: expected 4 columns, got 2");
    }

    #[test]
    fn test_not_found_message() {
        let err = TaxdbError::NotFound(PathBuf::from("/data/taxDB"));
        assert_eq!(err.to_string(), "Taxonomy database not found: /data/taxDB");
    }
}
