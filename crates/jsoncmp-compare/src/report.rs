//! The comparison pipeline: validate, parse, diff.

use jsoncmp_diff::{diff_documents, diff_values, DiffRecord, DiffSummary, DocumentDiff, StructuralDiff};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{InputError, InputResult};
use crate::input::{is_blank, parse_document, Side};

/// The outcome of comparing two documents.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonReport {
    pub first: Value,
    pub second: Value,
    pub diff: StructuralDiff,
}

impl ComparisonReport {
    /// Returns `true` if no differences were found.
    pub fn are_equal(&self) -> bool {
        self.diff.are_equal()
    }

    pub fn summary(&self) -> DiffSummary {
        self.diff.summary()
    }

    pub fn records(&self) -> &[DiffRecord] {
        &self.diff.records
    }

    /// The report for the same documents compared in the opposite order.
    pub fn swapped(self) -> Self {
        compare_values(self.second, self.first)
    }

    /// Line-level diff of the pretty-printed documents.
    pub fn document_diff(&self, context: usize) -> DocumentDiff {
        diff_documents(&self.first, &self.second, context)
    }

    /// Serializable view used for machine-readable output.
    pub fn view(&self) -> ReportView<'_> {
        ReportView {
            are_equal: self.are_equal(),
            summary: self.summary(),
            differences: self.records(),
        }
    }
}

/// JSON shape of a report: `{"areEqual", "summary", "differences"}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView<'a> {
    pub are_equal: bool,
    pub summary: DiffSummary,
    pub differences: &'a [DiffRecord],
}

/// Validate, parse, and compare two JSON texts.
///
/// Blank inputs are rejected together before anything is parsed; otherwise
/// the first input is parsed before the second and the first failure wins.
pub fn compare(first: &str, second: &str) -> InputResult<ComparisonReport> {
    let first_blank = is_blank(first);
    let second_blank = is_blank(second);
    if first_blank || second_blank {
        return Err(InputError::Empty {
            first: first_blank,
            second: second_blank,
        });
    }

    let left = parse_document(first, Side::First)?;
    let right = parse_document(second, Side::Second)?;
    Ok(compare_values(left, right))
}

/// Compare two already-parsed values.
pub fn compare_values(first: Value, second: Value) -> ComparisonReport {
    let diff = diff_values(&first, &second);
    let summary = diff.summary();
    debug!(
        added = summary.added,
        removed = summary.removed,
        modified = summary.modified,
        "comparison complete"
    );
    ComparisonReport { first, second, diff }
}
