//! Field normalization for ledger documents
//!
//! Stage 3 of the sanitizing pipeline. Rewrites individual cell values so the
//! downstream importer can parse them: accountant-style parenthesized
//! negatives become signed numbers, thousands separators are stripped from
//! anything that parses as a number, and free-text memo fields pass through
//! completely unchanged. Header rows are never touched.
//!
//! ## Architecture
//!
//! - [`classify`] - The pure per-field classification and rewrite function
//! - [`normalize_rows`] - Whole-document application with statistics
//!
//! Classification is a structured parse-attempt, not exception-driven: every
//! field maps to a [`FieldKind`] plus its normalized text, and malformed
//! numerics degrade to the memo fallback rather than erroring.

pub mod classify;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classify::{FieldKind, NormalizedField, classify};

use crate::app::models::{Document, Row};
use crate::app::services::sanitizer::stats::SanitizeStats;
use indicatif::ProgressBar;
use tracing::info;

/// Normalize every field of every transaction row
///
/// Header rows pass through verbatim. Field-level counts are accumulated
/// into `stats` so the final report can say how much rewriting happened.
pub fn normalize_rows(
    document: Document,
    stats: &mut SanitizeStats,
    progress: Option<&ProgressBar>,
) -> Document {
    let headers = document.headers().to_vec();

    let transactions: Vec<Row> = document
        .transactions()
        .iter()
        .map(|row| {
            if let Some(pb) = progress {
                pb.inc(1);
            }
            normalize_row(row, stats)
        })
        .collect();

    info!(
        "Field normalization complete: {} negatives converted, {} numbers comma-stripped, {} memo fields untouched",
        stats.negatives_converted, stats.numbers_stripped, stats.memo_fields
    );

    Document::new(headers, transactions).expect("header block preserved by field normalizer")
}

/// Normalize a single transaction row field by field
fn normalize_row(row: &Row, stats: &mut SanitizeStats) -> Row {
    row.iter()
        .map(|field| {
            let normalized = classify(field);
            match normalized.kind {
                FieldKind::NegativeNumber => stats.negatives_converted += 1,
                FieldKind::Number => stats.numbers_stripped += 1,
                FieldKind::Memo => stats.memo_fields += 1,
            }
            normalized.text
        })
        .collect()
}
