//! Sanitizing pipeline orchestration
//!
//! Chains the three document transformations in strict order, each stage
//! consuming the previous stage's whole output:
//!
//! 1. Row filtering ([`row_filter`](crate::app::services::row_filter))
//! 2. Column pruning ([`column_pruner`](crate::app::services::column_pruner))
//! 3. Field normalization ([`field_normalizer`](crate::app::services::field_normalizer))
//!
//! The intermediate documents exist only in memory; nothing touches the
//! filesystem here. A failed precondition (duplicate account header) aborts
//! before any stage runs, so the run is all-or-nothing.

pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use stats::{SanitizeResult, SanitizeStats};

use crate::Result;
use crate::app::models::Document;
use crate::app::services::{column_pruner, field_normalizer, row_filter};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Sanitizer for hand-annotated ledger documents
///
/// # Example
///
/// ```rust
/// use ledger_cleaner::{Document, Sanitizer};
///
/// # fn example(document: Document) -> ledger_cleaner::Result<()> {
/// let sanitizer = Sanitizer::new();
/// let result = sanitizer.sanitize(document, false)?;
/// println!("Kept {} transaction rows", result.document.transaction_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Sanitizer;

impl Sanitizer {
    /// Create a new sanitizer
    pub fn new() -> Self {
        Self
    }

    /// Run the full three-stage pipeline over a document
    ///
    /// # Arguments
    ///
    /// * `document` - The materialized input document
    /// * `show_progress` - Whether to show per-stage progress bars
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateHeader`] if the account-header row
    /// contains a repeated non-empty label. No partial output is produced.
    pub fn sanitize(&self, document: Document, show_progress: bool) -> Result<SanitizeResult> {
        let mut stats = SanitizeStats::new();
        stats.rows_in = document.transaction_count();
        stats.columns_in = document.account_header().len();

        info!(
            "Starting sanitizing pipeline for {} transaction rows",
            stats.rows_in
        );

        // Precondition: account headers must be unique before anything runs
        row_filter::check_account_uniqueness(&document)?;

        // Stage 1: drop rows missing required identifying fields
        let filter_pb = self.stage_progress_bar(show_progress, stats.rows_in, "Row filtering");
        let filtered = row_filter::filter_rows(document, filter_pb.as_ref());
        stats.rows_kept = filtered.transaction_count();
        stats.rows_dropped = stats.rows_in - stats.rows_kept;
        if let Some(pb) = filter_pb {
            pb.finish_with_message(format!("Row filtering complete: {} rows", stats.rows_kept));
        }

        // Stage 2: prune columns with empty account-header cells
        let prune_pb = self.stage_progress_bar(show_progress, stats.rows_kept, "Column pruning");
        let pruned = column_pruner::prune_columns(filtered, prune_pb.as_ref());
        stats.columns_kept = pruned.account_header().len();
        if let Some(pb) = prune_pb {
            pb.finish_with_message(format!(
                "Column pruning complete: {} columns",
                stats.columns_kept
            ));
        }

        // Stage 3: rewrite numeric fields
        let normalize_pb =
            self.stage_progress_bar(show_progress, stats.rows_kept, "Field normalization");
        let normalized = field_normalizer::normalize_rows(pruned, &mut stats, normalize_pb.as_ref());
        if let Some(pb) = normalize_pb {
            pb.finish_with_message(format!(
                "Field normalization complete: {} fields rewritten",
                stats.fields_rewritten()
            ));
        }

        info!("{}", stats.summary());

        Ok(SanitizeResult::new(normalized, stats))
    }

    /// Create a progress bar for a pipeline stage, if progress is enabled
    fn stage_progress_bar(
        &self,
        show_progress: bool,
        total: usize,
        operation: &str,
    ) -> Option<ProgressBar> {
        if !show_progress {
            return None;
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message(operation.to_string());
        Some(pb)
    }
}
