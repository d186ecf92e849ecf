//! Tabular gene-list parsing
//!
//! Uploaded gene lists arrive as delimited text: one header row, then one
//! gene identifier per row in the first column. Identifiers are opaque
//! tokens; no format validation or de-duplication is applied.

use crate::error::{AnnofuseError, Result};

/// Extract gene identifiers from a delimited-text upload.
///
/// Exactly one header row is read and discarded; field 0 of every following
/// row becomes a gene identifier, in row order. Rows may carry any number of
/// fields. An input with no rows at all is an error, not an empty list.
pub fn parse_gene_list(bytes: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = reader.records();

    // The first row is a header and carries no gene identifier.
    match rows.next() {
        Some(header) => {
            header?;
        },
        None => return Err(AnnofuseError::EmptyTable),
    }

    let mut genes = Vec::new();
    for record in rows {
        let record = record?;
        genes.push(record.get(0).unwrap_or("").to_string());
    }

    Ok(genes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_first_column_in_row_order() {
        let input = b"gene_id,comment\nBRCA1,breast cancer 1\nTP53,tumor protein\nEGFR,receptor\n";
        let genes = parse_gene_list(input).unwrap();
        assert_eq!(genes, vec!["BRCA1", "TP53", "EGFR"]);
    }

    #[test]
    fn test_header_row_is_discarded() {
        let input = b"gene_id\nBRCA1\n";
        let genes = parse_gene_list(input).unwrap();
        assert_eq!(genes, vec!["BRCA1"]);
    }

    #[test]
    fn test_header_only_yields_no_genes() {
        let genes = parse_gene_list(b"gene_id\n").unwrap();
        assert!(genes.is_empty());
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let result = parse_gene_list(b"");
        assert!(matches!(result, Err(AnnofuseError::EmptyTable)));
    }

    #[test]
    fn test_ragged_rows_are_accepted() {
        // Column counts are not validated; only field 0 matters.
        let input = b"gene_id,a,b\nBRCA1\nTP53,extra,fields,here\n";
        let genes = parse_gene_list(input).unwrap();
        assert_eq!(genes, vec!["BRCA1", "TP53"]);
    }

    #[test]
    fn test_duplicates_are_kept_verbatim() {
        let input = b"gene_id\nBRCA1\nBRCA1\n";
        let genes = parse_gene_list(input).unwrap();
        assert_eq!(genes, vec!["BRCA1", "BRCA1"]);
    }

    #[test]
    fn test_structural_failure_discards_all_rows() {
        // Invalid UTF-8 in a record aborts the whole parse.
        let input: &[u8] = b"gene_id\nBRCA1\n\xff\xfe,bad\n";
        let result = parse_gene_list(input);
        assert!(matches!(result, Err(AnnofuseError::Tabular(_))));
    }
}
