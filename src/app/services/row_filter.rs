//! Row filtering for ledger documents
//!
//! Stage 1 of the sanitizing pipeline. Drops transaction rows that are
//! missing either of the required identifying fields (date and proceeds),
//! which is how notes, life-to-date totals and blank separator rows kept
//! beneath the transactions are discarded. Header rows pass through
//! unchanged.
//!
//! Before any filtering happens the account-header row is checked for
//! duplicate non-empty labels. A duplicate is the one fatal condition of the
//! whole pipeline: no output is produced.

use crate::app::models::{Document, Row};
use crate::constants::REQUIRED_FIELD_INDICES;
use crate::{Error, Result};
use indicatif::ProgressBar;
use tracing::{debug, info};

/// Verify that no non-empty label repeats in the account-header row
///
/// Only header row 1 is checked; repeated labels in rows 2-4 are allowed.
/// Labels are scanned left to right and the first one that occurs more than
/// once anywhere in the row is reported, so the named label is the earliest
/// duplicated one, not the position of its repeat.
pub fn check_account_uniqueness(document: &Document) -> Result<()> {
    let header = document.account_header();

    for label in header {
        if label.is_empty() {
            continue;
        }
        if header.iter().filter(|other| *other == label).count() > 1 {
            return Err(Error::duplicate_header(label));
        }
    }

    Ok(())
}

/// Drop transaction rows missing either required identifying field
///
/// A row survives iff field 0 and field 1 are both non-empty strings.
/// Emptiness is literal equality with `""`: whitespace-only fields count as
/// populated. Rows with fewer than two fields are treated as having empty
/// missing fields and dropped.
pub fn filter_rows(document: Document, progress: Option<&ProgressBar>) -> Document {
    let headers = document.headers().to_vec();
    let total = document.transaction_count();

    let kept: Vec<Row> = document
        .transactions()
        .iter()
        .filter(|row| {
            if let Some(pb) = progress {
                pb.inc(1);
            }
            is_transaction_row(row.as_slice())
        })
        .cloned()
        .collect();

    info!(
        "Row filtering complete: {} -> {} transaction rows ({} dropped)",
        total,
        kept.len(),
        total - kept.len()
    );

    // Header count is unchanged, so reconstruction cannot fail
    Document::new(headers, kept).expect("header block preserved by row filter")
}

/// Check whether a row carries both required identifying fields
pub fn is_transaction_row(row: &[String]) -> bool {
    for index in REQUIRED_FIELD_INDICES {
        if Document::field(row, index).is_empty() {
            debug!("Dropping row missing required field {}", index);
            return false;
        }
    }
    true
}
