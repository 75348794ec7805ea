//! NCBI taxdump (`.dmp`) record writers
//!
//! Both files use the taxdump layout: fields separated by `\t|\t`, every line
//! terminated by `\t|\n`.
//!
//! ```text
//! nodes.dmp: tax_id | parent tax_id | rank |
//! names.dmp: tax_id | name_txt | unique name | name class |
//! ```
//!
//! Only the leading columns read by Kraken-style classifiers are written.
//! nodes.dmp stops after the rank (no embl code, division or genetic code
//! columns) and names.dmp only carries the scientific name of each taxon.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use taxdb_common::TaxonomyEntry;
use tracing::debug;

use crate::error::{CliError, Result};

/// Separator between two fields of a record
pub const FIELD_SEPARATOR: &str = "\t|\t";

/// Terminator of every record
pub const LINE_TERMINATOR: &str = "\t|\n";

/// Name class written to the fourth column of names.dmp
pub const SCIENTIFIC_NAME_CLASS: &str = "scientific name";

/// Write one nodes.dmp record: `tax_id | parent | rank |`
pub fn write_node_line<W: Write>(out: &mut W, entry: &TaxonomyEntry) -> std::io::Result<()> {
    write!(
        out,
        "{}{sep}{}{sep}{}{end}",
        entry.taxonomy_id,
        entry.parent_taxonomy_id,
        entry.rank,
        sep = FIELD_SEPARATOR,
        end = LINE_TERMINATOR,
    )
}

/// Write one names.dmp record: `tax_id | name | <empty> | scientific name |`
pub fn write_name_line<W: Write>(out: &mut W, entry: &TaxonomyEntry) -> std::io::Result<()> {
    write!(
        out,
        "{}{sep}{}{sep}{sep}{}{end}",
        entry.taxonomy_id,
        entry.scientific_name,
        SCIENTIFIC_NAME_CLASS,
        sep = FIELD_SEPARATOR,
        end = LINE_TERMINATOR,
    )
}

struct Sink<W: Write> {
    path: PathBuf,
    out: W,
}

impl<W: Write> Sink<W> {
    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(|e| CliError::write(&self.path, e))
    }
}

/// Paired names.dmp / nodes.dmp writer
///
/// Dropping the writer without calling [`TaxdumpWriter::finish`] still
/// flushes and closes both files, but flush errors are lost.
pub struct TaxdumpWriter<W: Write> {
    names: Sink<W>,
    nodes: Sink<W>,
    written: usize,
}

impl TaxdumpWriter<BufWriter<File>> {
    /// Create (or truncate) both output files
    ///
    /// names.dmp is opened first. If nodes.dmp then fails to open, the names
    /// file is left behind empty.
    pub fn create(
        names_path: impl AsRef<Path>,
        nodes_path: impl AsRef<Path>,
        buffer_size: usize,
    ) -> Result<Self> {
        let names = open_output(names_path.as_ref(), buffer_size)?;
        let nodes = open_output(nodes_path.as_ref(), buffer_size)?;

        debug!(
            names = %names.path.display(),
            nodes = %nodes.path.display(),
            buffer_size,
            "Created taxdump output files"
        );

        Ok(Self {
            names,
            nodes,
            written: 0,
        })
    }
}

fn open_output(path: &Path, buffer_size: usize) -> Result<Sink<BufWriter<File>>> {
    let file = File::create(path).map_err(|e| CliError::output_open(path, e))?;

    Ok(Sink {
        path: path.to_path_buf(),
        out: BufWriter::with_capacity(buffer_size, file),
    })
}

impl<W: Write> TaxdumpWriter<W> {
    /// Wrap two arbitrary writers; the paths are only used in error messages
    pub fn new(
        names: W,
        names_path: impl Into<PathBuf>,
        nodes: W,
        nodes_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            names: Sink {
                path: names_path.into(),
                out: names,
            },
            nodes: Sink {
                path: nodes_path.into(),
                out: nodes,
            },
            written: 0,
        }
    }

    /// Write the nodes record and the names record for one entry
    pub fn write_entry(&mut self, entry: &TaxonomyEntry) -> Result<()> {
        write_node_line(&mut self.nodes.out, entry)
            .map_err(|e| CliError::write(&self.nodes.path, e))?;
        write_name_line(&mut self.names.out, entry)
            .map_err(|e| CliError::write(&self.names.path, e))?;

        self.written += 1;
        Ok(())
    }

    /// Number of entries written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush both outputs and close them, returning the number of entries
    /// written
    pub fn finish(mut self) -> Result<usize> {
        self.names.flush()?;
        self.nodes.flush()?;
        Ok(self.written)
    }
}
