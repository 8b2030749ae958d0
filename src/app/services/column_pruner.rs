//! Column pruning for ledger documents
//!
//! Stage 2 of the sanitizing pipeline. Columns whose account-header cell is
//! empty exist only for the user's benefit (running balances, flag columns,
//! scratch notes) and are removed from every row, header rows included.
//!
//! Retention is decided purely by position: the set of kept indices is
//! computed once from header row 1 and applied uniformly. Content is never
//! compared or merged, so two distinct columns carrying the same label in
//! rows 2-4 are both retained independently.

use crate::app::models::{Document, Row};
use indicatif::ProgressBar;
use tracing::info;

/// Compute the ordered set of column indices to keep
///
/// An index is kept exactly when the account-header cell at that position is
/// non-empty. Ascending order preserves the original left-to-right layout.
pub fn retained_columns(account_header: &Row) -> Vec<usize> {
    account_header
        .iter()
        .enumerate()
        .filter(|(_, label)| !label.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Project every row of the document onto the retained columns
///
/// Rows shorter than a retained index contribute `""` for that position, so
/// ragged hand-edited rows come out rectangular: every output row has
/// exactly as many fields as there are retained columns.
pub fn prune_columns(document: Document, progress: Option<&ProgressBar>) -> Document {
    let kept = retained_columns(document.account_header());

    let headers: Vec<Row> = document
        .headers()
        .iter()
        .map(|row| project_row(row, &kept))
        .collect();

    let transactions: Vec<Row> = document
        .transactions()
        .iter()
        .map(|row| {
            if let Some(pb) = progress {
                pb.inc(1);
            }
            project_row(row, &kept)
        })
        .collect();

    info!(
        "Column pruning complete: {} -> {} columns",
        document.account_header().len(),
        kept.len()
    );

    Document::new(headers, transactions).expect("header block preserved by column pruner")
}

/// Project a single row onto the kept indices, clipping missing fields to `""`
fn project_row(row: &Row, kept: &[usize]) -> Row {
    kept.iter()
        .map(|&i| Document::field(row, i).to_string())
        .collect()
}
