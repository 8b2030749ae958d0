//! Application constants for the ledger cleaner
//!
//! This module contains the structural constants of the input file convention
//! and default values used throughout the application.

// =============================================================================
// Input File Convention
// =============================================================================

/// Number of fixed header rows at the top of every input file
///
/// Row 1 carries the account names/headers; rows 2-4 carry secondary labels
/// (ticker, margin flag, column captions in the cryptools convention).
pub const HEADER_ROW_COUNT: usize = 4;

/// Field indices that must be non-empty for a row to count as a transaction
///
/// Field 0 is the transaction date, field 1 the proceeds. Rows missing either
/// are notes, subtotals or blank separators and are dropped.
pub const REQUIRED_FIELD_INDICES: [usize; 2] = [0, 1];

// =============================================================================
// Numeric Formatting
// =============================================================================

/// Character opening an accountant-style negative number
pub const NEGATIVE_OPEN: char = '(';

/// Character closing an accountant-style negative number
pub const NEGATIVE_CLOSE: char = ')';

/// Thousands separator stripped from numeric fields
pub const THOUSANDS_SEPARATOR: char = ',';

// =============================================================================
// Output Defaults
// =============================================================================

/// Suffix appended to the input file stem when no output path is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-cleaned";
