//! taxdb-dump Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Exports a taxonomy database (taxDB) as the `names.dmp` / `nodes.dmp` pair
//! of an NCBI taxonomy dump, restricted to the columns Kraken-style
//! classifiers read.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use taxdb_dump::{commands::dump, config::DumpConfig};
//!
//! fn main() -> taxdb_dump::Result<()> {
//!     let summary = dump::run(
//!         Path::new("taxDB"),
//!         Path::new("names.dmp"),
//!         Path::new("nodes.dmp"),
//!         &DumpConfig::from_env()?,
//!     )?;
//!     println!("{} taxa exported", summary.entries_written);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod dmp;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when the arguments are wrong
pub const USAGE: &str = "Usage: dump_taxdb taxDB names.dmp nodes.dmp";

/// Dump a taxonomy database as NCBI names.dmp and nodes.dmp files
#[derive(Parser, Debug)]
#[command(name = "dump_taxdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Taxonomy database to read (taxDB, optionally .gz)
    pub taxdb: PathBuf,

    /// Output path for names.dmp (created or truncated)
    pub names: PathBuf,

    /// Output path for nodes.dmp (created or truncated)
    pub nodes: PathBuf,

    /// Verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_three_paths() {
        let cli = Cli::try_parse_from(["dump_taxdb", "taxDB", "names.dmp", "nodes.dmp"]).unwrap();
        assert_eq!(cli.taxdb, PathBuf::from("taxDB"));
        assert_eq!(cli.names, PathBuf::from("names.dmp"));
        assert_eq!(cli.nodes, PathBuf::from("nodes.dmp"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_verbose() {
        let cli = Cli::try_parse_from(["dump_taxdb", "-v", "taxDB", "names.dmp", "nodes.dmp"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_too_few_arguments() {
        let err = Cli::try_parse_from(["dump_taxdb", "taxDB", "names.dmp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Cli::try_parse_from(["dump_taxdb", "taxDB", "names.dmp", "nodes.dmp", "extra"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
