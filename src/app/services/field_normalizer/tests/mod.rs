//! Tests for the field normalizer service

pub mod classify_tests;

use crate::app::models::{Document, Row};

/// Build a row from string literals
pub fn row(fields: &[&str]) -> Row {
    fields.iter().map(|s| s.to_string()).collect()
}

/// Build a document with a standard 3-column header block
pub fn document_with(transactions: Vec<Row>) -> Document {
    let headers = vec![
        row(&["Date", "Proceeds", "Bank USD"]),
        row(&["", "", "USD"]),
        row(&["", "", "non-margin"]),
        row(&["date", "proceeds", "amount"]),
    ];
    Document::new(headers, transactions).unwrap()
}
