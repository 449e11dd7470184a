//! Comparison pipeline for jsoncmp.
//!
//! Validates and parses the two input texts, reporting blank inputs and
//! parse failures (with a 1-based line locator and the failing side), then
//! runs the structural diff and wraps the result in a [`ComparisonReport`].

pub mod error;
pub mod input;
pub mod report;
pub mod sample;

pub use error::{InputError, InputResult};
pub use input::{format_document, is_blank, line_at_offset, parse_document, Side};
pub use report::{compare, compare_values, ComparisonReport, ReportView};
pub use sample::sample_pair;
