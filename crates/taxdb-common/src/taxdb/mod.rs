//! Taxonomy database reader
//!
//! Loads a Kraken-style `taxDB` file into memory and exposes its entries
//! read-only. Files ending in `.gz` are decompressed on the fly.
//!
//! The whole file is loaded by [`TaxonomyDb::open`]; a malformed line aborts
//! the load instead of being skipped, so a corrupt database never yields a
//! silently truncated view.

pub mod models;
pub mod parser;

pub use models::TaxonomyEntry;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::error::{Result, TaxdbError};

/// Read-only traversal over stored taxon entries
///
/// Iteration order is whatever the store yields. Implementations must yield
/// the same order on every call for the same data.
pub trait TaxonomySource {
    /// Iterate over every stored entry
    fn entries(&self) -> Box<dyn Iterator<Item = &TaxonomyEntry> + '_>;
}

impl TaxonomySource for [TaxonomyEntry] {
    fn entries(&self) -> Box<dyn Iterator<Item = &TaxonomyEntry> + '_> {
        Box::new(self.iter())
    }
}

/// In-memory taxonomy database
#[derive(Debug, Clone, Default)]
pub struct TaxonomyDb {
    entries: Vec<TaxonomyEntry>,
    index: HashMap<u32, usize>,
}

impl TaxonomyDb {
    /// Open a taxDB file
    ///
    /// # Errors
    /// - [`TaxdbError::NotFound`] if `path` does not exist
    /// - [`TaxdbError::Io`] if it cannot be read or decompressed
    /// - [`TaxdbError::Parse`] on the first malformed line
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TaxdbError::NotFound(path.to_path_buf()),
            _ => TaxdbError::Io(e),
        })?;

        let db = if is_gzipped(path) {
            debug!(path = %path.display(), "Opening gzip-compressed taxonomy database");
            Self::from_reader(BufReader::new(MultiGzDecoder::new(file)))?
        } else {
            debug!(path = %path.display(), "Opening taxonomy database");
            Self::from_reader(BufReader::new(file))?
        };

        debug!(path = %path.display(), entries = db.len(), "Loaded taxonomy database");
        Ok(db)
    }

    /// Parse a taxDB from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut db = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_num = idx + 1;

            if let Some(entry) = parser::parse_line(&line, line_num)? {
                db.insert(entry, line_num);
            }
        }

        Ok(db)
    }

    fn insert(&mut self, entry: TaxonomyEntry, line_num: usize) {
        match self.index.entry(entry.taxonomy_id) {
            Entry::Occupied(_) => {
                debug!(
                    taxonomy_id = entry.taxonomy_id,
                    line = line_num,
                    "Duplicate taxonomy ID, keeping first entry"
                );
            },
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(entry);
            },
        }
    }

    /// Look up an entry by taxonomy ID
    pub fn get(&self, taxonomy_id: u32) -> Option<&TaxonomyEntry> {
        self.index.get(&taxonomy_id).map(|&i| &self.entries[i])
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TaxonomySource for TaxonomyDb {
    fn entries(&self) -> Box<dyn Iterator<Item = &TaxonomyEntry> + '_> {
        Box::new(self.entries.iter())
    }
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
