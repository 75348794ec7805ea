//! `dump_taxdb` export implementation
//!
//! Opens a taxonomy database, then writes one names.dmp and one nodes.dmp
//! record per entry in the order the database yields them.

use std::io::Write;
use std::path::{Path, PathBuf};

use taxdb_common::{TaxonomyDb, TaxonomySource};
use tracing::{debug, info};

use crate::config::DumpConfig;
use crate::dmp::TaxdumpWriter;
use crate::error::{CliError, Result};

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    /// Number of records written to each output file
    pub entries_written: usize,
    pub taxdb: PathBuf,
    pub names: PathBuf,
    pub nodes: PathBuf,
}

/// Export `taxdb_path` into `names_path` and `nodes_path`
///
/// The database is opened before either output, so a missing or corrupt
/// database leaves no output files behind.
pub fn run(
    taxdb_path: &Path,
    names_path: &Path,
    nodes_path: &Path,
    config: &DumpConfig,
) -> Result<DumpSummary> {
    let db = TaxonomyDb::open(taxdb_path).map_err(|e| CliError::database(taxdb_path, e))?;
    debug!(path = %taxdb_path.display(), entries = db.len(), "Opened taxonomy database");

    let mut writer = TaxdumpWriter::create(names_path, nodes_path, config.write_buffer_size())?;
    export(&db, &mut writer)?;
    let entries_written = writer.finish()?;

    let summary = DumpSummary {
        entries_written,
        taxdb: taxdb_path.to_path_buf(),
        names: names_path.to_path_buf(),
        nodes: nodes_path.to_path_buf(),
    };

    info!(
        entries = summary.entries_written,
        taxdb = %summary.taxdb.display(),
        names = %summary.names.display(),
        nodes = %summary.nodes.display(),
        "Taxonomy export complete"
    );

    Ok(summary)
}

/// Stream every entry of `source` into `writer`
pub fn export<S, W>(source: &S, writer: &mut TaxdumpWriter<W>) -> Result<()>
where
    S: TaxonomySource + ?Sized,
    W: Write,
{
    for entry in source.entries() {
        writer.write_entry(entry)?;
    }
    Ok(())
}
