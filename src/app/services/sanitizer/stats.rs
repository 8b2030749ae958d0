//! Statistics and result structures for the sanitizing pipeline
//!
//! Tracks what each stage did to the document so the final report can tell
//! the user how many rows were dropped, how many columns were pruned, and
//! how much numeric rewriting happened.

use crate::app::models::Document;
use serde::Serialize;

/// Statistics for one sanitizing run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizeStats {
    /// Transaction rows in the input document
    pub rows_in: usize,
    /// Transaction rows surviving the row filter
    pub rows_kept: usize,
    /// Transaction rows dropped by the row filter
    pub rows_dropped: usize,
    /// Columns in the input document's account-header row
    pub columns_in: usize,
    /// Columns retained by the pruner
    pub columns_kept: usize,
    /// Fields rewritten from parenthesized negatives to signed numbers
    pub negatives_converted: usize,
    /// Fields recognized as numbers and stripped of thousands separators
    pub numbers_stripped: usize,
    /// Fields left completely unchanged by the normalizer
    pub memo_fields: usize,
}

impl SanitizeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_in: 0,
            rows_kept: 0,
            rows_dropped: 0,
            columns_in: 0,
            columns_kept: 0,
            negatives_converted: 0,
            numbers_stripped: 0,
            memo_fields: 0,
        }
    }

    /// Total fields rewritten by the normalizer
    pub fn fields_rewritten(&self) -> usize {
        self.negatives_converted + self.numbers_stripped
    }

    /// Percentage of input rows that survived filtering
    pub fn keep_rate(&self) -> f64 {
        if self.rows_in == 0 {
            100.0
        } else {
            (self.rows_kept as f64 / self.rows_in as f64) * 100.0
        }
    }

    /// Get summary of the sanitizing run for logging
    pub fn summary(&self) -> String {
        format!(
            "Sanitize Summary: {} -> {} rows ({:.1}% kept) | \
             {} -> {} columns | \
             {} negatives converted, {} numbers comma-stripped, {} memos untouched",
            self.rows_in,
            self.rows_kept,
            self.keep_rate(),
            self.columns_in,
            self.columns_kept,
            self.negatives_converted,
            self.numbers_stripped,
            self.memo_fields
        )
    }
}

impl Default for SanitizeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a sanitizing run
#[derive(Debug, Clone)]
pub struct SanitizeResult {
    /// The fully sanitized document, ready for the downstream importer
    pub document: Document,
    /// What the pipeline did to produce it
    pub stats: SanitizeStats,
}

impl SanitizeResult {
    /// Create a new sanitize result
    pub fn new(document: Document, stats: SanitizeStats) -> Self {
        Self { document, stats }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
