//! Structural diff engine for JSON documents.
//!
//! Compares two parsed JSON values node by node and produces an ordered list
//! of path-tagged differences, plus helpers for rendering values and a
//! line-level diff of the pretty-printed documents.
//!
//! # Key Types
//!
//! - [`StructuralDiff`] / [`DiffRecord`] / [`DiffKind`] -- Path-tagged structural changes
//! - [`DiffSummary`] -- Per-kind counts
//! - [`DocumentDiff`] / [`DiffHunk`] / [`DiffLine`] -- Line view of the pretty-printed documents

pub mod display;
pub mod record;
pub mod structural;
pub mod text_diff;

pub use display::{format_value, pretty};
pub use record::{DiffKind, DiffRecord};
pub use structural::{
    diff_at, diff_values, display_path, join_path, CoarseType, DiffSummary, StructuralDiff,
    ROOT_PATH,
};
pub use text_diff::{diff_documents, DiffHunk, DiffLine, DocumentDiff, LineRange};
