//! Core data model for ledger cleaning
//!
//! An input file is represented as a [`Document`]: a fixed block of four
//! header rows followed by zero or more transaction rows. Each pipeline stage
//! consumes a whole `Document` and produces a new one; nothing is streamed
//! and no stage mutates an earlier stage's output.

use crate::constants::HEADER_ROW_COUNT;
use crate::{Error, Result};

/// A single CSV row: one raw string per column index
pub type Row = Vec<String>;

/// A fully materialized ledger document
///
/// The header block is positionally fixed at four rows. Row 1 carries the
/// account names/headers and drives both duplicate detection and column
/// retention; rows 2-4 are carried through untouched by every stage except
/// column projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The four fixed header rows, in file order
    headers: Vec<Row>,
    /// All rows after the header block
    transactions: Vec<Row>,
}

impl Document {
    /// Create a document from a header block and transaction rows
    ///
    /// Fails unless exactly [`HEADER_ROW_COUNT`] header rows are supplied.
    pub fn new(headers: Vec<Row>, transactions: Vec<Row>) -> Result<Self> {
        if headers.len() != HEADER_ROW_COUNT {
            return Err(Error::invalid_format(
                "document",
                format!(
                    "expected {} header rows, got {}",
                    HEADER_ROW_COUNT,
                    headers.len()
                ),
            ));
        }

        Ok(Self {
            headers,
            transactions,
        })
    }

    /// Split a flat row sequence into header block and transactions
    ///
    /// This is how documents are built from a freshly read file: the first
    /// four rows become the header block, everything after is a transaction.
    pub fn from_rows(mut rows: Vec<Row>) -> Result<Self> {
        if rows.len() < HEADER_ROW_COUNT {
            return Err(Error::invalid_format(
                "document",
                format!(
                    "expected at least {} header rows, got {}",
                    HEADER_ROW_COUNT,
                    rows.len()
                ),
            ));
        }

        let transactions = rows.split_off(HEADER_ROW_COUNT);
        Self::new(rows, transactions)
    }

    /// The account-header row (header row 1)
    pub fn account_header(&self) -> &Row {
        &self.headers[0]
    }

    /// All four header rows in file order
    pub fn headers(&self) -> &[Row] {
        &self.headers
    }

    /// The transaction rows in file order
    pub fn transactions(&self) -> &[Row] {
        &self.transactions
    }

    /// Number of transaction rows
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Iterate over all rows, headers first
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        self.headers.iter().chain(self.transactions.iter())
    }

    /// Look up a field in a row, clipping out-of-range indices to `""`
    ///
    /// Human-edited rows are frequently ragged. A missing trailing field is
    /// treated as empty rather than a structural error.
    pub fn field(row: &[String], index: usize) -> &str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    fn four_headers() -> Vec<Row> {
        vec![
            row(&["Date", "Proceeds", "Bank USD"]),
            row(&["", "", "USD"]),
            row(&["", "", "non-margin"]),
            row(&["date", "proceeds", "amount"]),
        ]
    }

    #[test]
    fn test_new_requires_four_header_rows() {
        let result = Document::new(vec![row(&["only", "one"])], Vec::new());
        assert!(result.is_err());

        let result = Document::new(four_headers(), Vec::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_rows_splits_header_block() {
        let mut rows = four_headers();
        rows.push(row(&["1/1/22", "100.00", "100.00"]));
        rows.push(row(&["1/2/22", "50.00", "150.00"]));

        let document = Document::from_rows(rows).unwrap();
        assert_eq!(document.headers().len(), 4);
        assert_eq!(document.transaction_count(), 2);
        assert_eq!(document.account_header()[0], "Date");
    }

    #[test]
    fn test_from_rows_rejects_short_input() {
        let rows = vec![row(&["a"]), row(&["b"])];
        assert!(Document::from_rows(rows).is_err());
    }

    #[test]
    fn test_field_clips_out_of_range_to_empty() {
        let r = row(&["1/1/22", "100.00"]);
        assert_eq!(Document::field(&r, 0), "1/1/22");
        assert_eq!(Document::field(&r, 1), "100.00");
        assert_eq!(Document::field(&r, 2), "");
        assert_eq!(Document::field(&r, 99), "");
    }

    #[test]
    fn test_all_rows_yields_headers_first() {
        let mut rows = four_headers();
        rows.push(row(&["1/1/22", "100.00", "100.00"]));
        let document = Document::from_rows(rows).unwrap();

        let collected: Vec<&Row> = document.all_rows().collect();
        assert_eq!(collected.len(), 5);
        assert_eq!(collected[0][0], "Date");
        assert_eq!(collected[4][0], "1/1/22");
    }
}
