//! Per-field classification and rewriting
//!
//! The heart of the normalizer: a pure function from raw field text to
//! (kind, normalized text). No state, no I/O, no panics.

use crate::constants::{NEGATIVE_CLOSE, NEGATIVE_OPEN, THOUSANDS_SEPARATOR};

/// What the normalizer decided a field is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Parenthesized negative number, e.g. `(1,000.00)`
    NegativeNumber,
    /// Plain number, possibly with thousands separators, e.g. `1,234.56`
    Number,
    /// Anything else: free text, dates, empty fields
    Memo,
}

/// The outcome of classifying one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedField {
    pub kind: FieldKind,
    pub text: String,
}

/// Classify a raw field and produce its normalized text
///
/// Rules, applied in order:
///
/// 1. A field whose first character is `(` is a parenthesized negative:
///    every `(` becomes `-` and every `)` and `,` is removed. This rule
///    always wins, even for malformed input like `(abc`, whose rewrite is
///    emitted as-is.
/// 2. Otherwise the field is stripped of `,` and parsed as `f64`, ignoring
///    surrounding whitespace for the parse only. Success means it was a
///    number with optional thousands separators; the comma-stripped text is
///    emitted with its original precision and padding intact.
/// 3. Anything that fails the parse is a memo and passes through unchanged,
///    commas included. The empty string lands here, producing `""`.
pub fn classify(raw: &str) -> NormalizedField {
    if raw.starts_with(NEGATIVE_OPEN) {
        let text = raw
            .replace(NEGATIVE_OPEN, "-")
            .replace(NEGATIVE_CLOSE, "")
            .replace(THOUSANDS_SEPARATOR, "");
        return NormalizedField {
            kind: FieldKind::NegativeNumber,
            text,
        };
    }

    let stripped = raw.replace(THOUSANDS_SEPARATOR, "");
    if stripped.trim().parse::<f64>().is_ok() {
        return NormalizedField {
            kind: FieldKind::Number,
            text: stripped,
        };
    }

    NormalizedField {
        kind: FieldKind::Memo,
        text: raw.to_string(),
    }
}
