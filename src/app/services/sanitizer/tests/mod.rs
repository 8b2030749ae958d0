//! Tests for the sanitizing pipeline


use crate::app::models::{Document, Row};

/// Build a row from string literals
pub fn row(fields: &[&str]) -> Row {
    fields.iter().map(|s| s.to_string()).collect()
}

/// A realistic annotated export: two unlabeled working columns (running
/// balance and notes), a subtotal row and a stray note row mixed in with
/// real transactions.
pub fn annotated_export() -> Document {
    let headers = vec![
        row(&["Date", "Proceeds", "Coinbase BTC", "", ""]),
        row(&["", "", "BTC", "", ""]),
        row(&["", "", "non-margin", "", ""]),
        row(&["date", "proceeds", "amount", "balance", "notes"]),
    ];
    let transactions = vec![
        row(&["1/1/22", "220.00", "0.01", "0.01", ""]),
        row(&["", "450.00", "", "subtotal", ""]),
        row(&["2/1/22", "(1,000.00)", "(0.05)", "-0.04", "see memo, ok"]),
        row(&["check this later", "", "", "", ""]),
    ];
    Document::new(headers, transactions).unwrap()
}
