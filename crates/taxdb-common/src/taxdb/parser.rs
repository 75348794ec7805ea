//! taxDB line parser
//!
//! A taxDB file holds one taxon per line:
//!
//! ```text
//! taxonomyID <TAB> parentTaxonomyID <TAB> scientificName <TAB> rank [<TAB> ...]
//! 9606 <TAB> 9605 <TAB> Homo sapiens <TAB> species
//! ```
//!
//! Columns after the rank are ignored. Newer taxDB builds append genome size
//! counters there.

use crate::error::{Result, TaxdbError};

use super::models::TaxonomyEntry;

/// Minimum number of tab-separated columns in a taxDB line
pub const MIN_COLUMNS: usize = 4;

/// Parse a single taxDB line
///
/// Returns `Ok(None)` for blank lines. `line_num` is 1-based and only used in
/// error messages.
pub fn parse_line(line: &str, line_num: usize) -> Result<Option<TaxonomyEntry>> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < MIN_COLUMNS {
        return Err(TaxdbError::parse(
            line_num,
            format!("expected at least {} tab-separated columns, got {}", MIN_COLUMNS, fields.len()),
        ));
    }

    let taxonomy_id = parse_id(fields[0], "taxonomy ID", line_num)?;
    let parent_taxonomy_id = parse_id(fields[1], "parent taxonomy ID", line_num)?;

    Ok(Some(TaxonomyEntry::new(
        taxonomy_id,
        parent_taxonomy_id,
        fields[3],
        fields[2],
    )))
}

fn parse_id(field: &str, what: &str, line_num: usize) -> Result<u32> {
    field
        .trim()
        .parse()
        .map_err(|_| TaxdbError::parse(line_num, format!("invalid {}: '{}'", what, field)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_line() {
        let entry = parse_line("9606\t9605\tHomo sapiens\tspecies", 1).unwrap().unwrap();

        assert_eq!(entry.taxonomy_id, 9606);
        assert_eq!(entry.parent_taxonomy_id, 9605);
        assert_eq!(entry.scientific_name, "Homo sapiens");
        assert_eq!(entry.rank, "species");
    }

    #[test]
    fn test_parse_line_ignores_extra_columns() {
        let entry = parse_line("562\t561\tEscherichia coli\tspecies\t4641652\t12", 3)
            .unwrap()
            .unwrap();

        assert_eq!(entry.taxonomy_id, 562);
        assert_eq!(entry.rank, "species");
    }

    #[test]
    fn test_parse_line_strips_carriage_return() {
        let entry = parse_line("1\t1\troot\tno rank\r", 1).unwrap().unwrap();
        assert_eq!(entry.rank, "no rank");
        assert_eq!(entry.taxonomy_id, entry.parent_taxonomy_id);
    }

    #[test]
    fn test_parse_line_keeps_empty_rank() {
        let entry = parse_line("10\t1\tCellvibrio\t", 1).unwrap().unwrap();
        assert_eq!(entry.rank, "");
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   \r", 2).unwrap().is_none());
    }

    #[test]
    fn test_too_few_columns() {
        let err = parse_line("9606\t9605\tHomo sapiens", 7).unwrap_err();
        match err {
            TaxdbError::Parse { line, message } => {
                assert_eq!(line, 7);
                assert!(message.contains("got 3"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_ids() {
        assert!(matches!(
            parse_line("abc\t1\tx\tgenus", 1),
            Err(TaxdbError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_line("5\t-1\tx\tgenus", 2),
            Err(TaxdbError::Parse { line: 2, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_columns_are_read_back(
            id in any::<u32>(),
            parent in any::<u32>(),
            name in "[A-Za-z][A-Za-z .()-]{0,40}",
            rank in "[a-z][a-z ]{0,15}",
        ) {
            let line = format!("{}\t{}\t{}\t{}", id, parent, name, rank);
            let entry = parse_line(&line, 1).unwrap().unwrap();

            prop_assert_eq!(entry.taxonomy_id, id);
            prop_assert_eq!(entry.parent_taxonomy_id, parent);
            prop_assert_eq!(entry.scientific_name, name);
            prop_assert_eq!(entry.rank, rank);
        }
    }
}
