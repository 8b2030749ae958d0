//! Filesystem boundary for ledger documents
//!
//! Whole-file CSV read and write. The pipeline only ever sees materialized
//! [`Document`] values; these adapters are the sole place the cleaner
//! touches the disk. Reads are flexible about field counts because
//! hand-edited rows are ragged; writes quote per standard CSV rules.

use crate::app::models::{Document, Row};
use crate::constants::HEADER_ROW_COUNT;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Read a CSV file into a fully materialized document
///
/// The first four rows become the header block. Fails with
/// [`Error::InvalidFormat`] if the file holds fewer than four rows.
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    info!("Reading ledger file: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to open CSV reader",
                Some(e),
            )
        })?;

    let mut rows: Vec<Row> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                format!("failed to parse record {}", i + 1),
                Some(e),
            )
        })?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }

    if rows.len() < HEADER_ROW_COUNT {
        return Err(Error::invalid_format(
            path.display().to_string(),
            format!(
                "expected at least {} header rows, found {} rows",
                HEADER_ROW_COUNT,
                rows.len()
            ),
        ));
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Document::from_rows(rows)
}

/// Write a document to a CSV file, replacing any existing content
pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    info!("Writing sanitized file: {}", path.display());

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                "failed to open CSV writer",
                Some(e),
            )
        })?;

    for row in document.all_rows() {
        writer.write_record(row).map_err(|e| {
            Error::csv_parsing(path.display().to_string(), "failed to write row", Some(e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush {}", path.display()), e))?;

    debug!(
        "Wrote {} header rows and {} transaction rows",
        document.headers().len(),
        document.transaction_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_splits_headers_and_transactions() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "in.csv",
            "Date,Proceeds,Bank\n,,USD\n,,non-margin\ndate,proceeds,amount\n1/1/22,100.00,100.00\n",
        );

        let document = read_document(&path).unwrap();
        assert_eq!(document.headers().len(), 4);
        assert_eq!(document.transaction_count(), 1);
        assert_eq!(document.transactions()[0][1], "100.00");
    }

    #[test]
    fn test_read_handles_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "in.csv",
            "Date,Proceeds,Bank\n,,USD\n,,non-margin\ndate,proceeds,amount\n1/1/22,100.00\n",
        );

        let document = read_document(&path).unwrap();
        assert_eq!(document.transactions()[0].len(), 2);
    }

    #[test]
    fn test_read_preserves_quoted_commas() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "in.csv",
            "Date,Memo\n,\n,\ndate,memo\n1/1/22,\"Paid to John, Inc.\"\n",
        );

        let document = read_document(&path).unwrap();
        assert_eq!(document.transactions()[0][1], "Paid to John, Inc.");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_document(Path::new("/nonexistent/in.csv")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_read_too_few_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "in.csv", "Date,Proceeds\n,,\n");

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { .. }));
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let input = write_file(
            &dir,
            "in.csv",
            "Date,Proceeds,Bank\n,,USD\n,,non-margin\ndate,proceeds,amount\n1/1/22,-1000.00,\"note, kept\"\n",
        );

        let document = read_document(&input).unwrap();
        let output = dir.path().join("out.csv");
        write_document(&output, &document).unwrap();

        let reread = read_document(&output).unwrap();
        assert_eq!(reread, document);
    }
}
