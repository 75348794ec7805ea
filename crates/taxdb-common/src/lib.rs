//! taxdb Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging and the taxonomy database reader used by the
//! taxdb-dump workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`TaxdbError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup driven by [`logging::LogConfig`]
//! - **Taxonomy database**: [`taxdb::TaxonomyDb`], a read-only view over a
//!   Kraken-style `taxDB` file
//!
//! # Example
//!
//! ```no_run
//! use taxdb_common::taxdb::{TaxonomyDb, TaxonomySource};
//!
//! fn count(path: &str) -> taxdb_common::Result<usize> {
//!     let db = TaxonomyDb::open(path)?;
//!     Ok(db.entries().count())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod taxdb;

// Re-export commonly used types
pub use error::{Result, TaxdbError};
pub use taxdb::{TaxonomyDb, TaxonomyEntry, TaxonomySource};
