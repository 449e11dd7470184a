//! Parsing of the two input documents.
//!
//! Parse failures are located by a 1-based line number derived from the
//! character offset of the error, and tagged with the side that failed.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{InputError, InputResult};

/// Which of the two compared inputs a value or error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Returns `true` if the text is empty or whitespace-only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// 1-based line number of the character at `offset`: the number of
/// newlines before it, plus one.
pub fn line_at_offset(text: &str, offset: usize) -> usize {
    text.chars().take(offset).filter(|c| *c == '\n').count() + 1
}

/// Parse one input document.
pub fn parse_document(text: &str, side: Side) -> InputResult<Value> {
    match serde_json::from_str(text) {
        Ok(value) => {
            debug!(%side, bytes = text.len(), "parsed input");
            Ok(value)
        }
        Err(err) => {
            let offset = char_offset(text, err.line(), err.column());
            let error = InputError::Parse {
                side,
                message: bare_message(&err),
                offset,
                line: line_at_offset(text, offset),
            };
            debug!(%side, offset, "input rejected: {error}");
            Err(error)
        }
    }
}

/// Parse a document and pretty-print it with a two-space indent.
pub fn format_document(text: &str, side: Side) -> InputResult<String> {
    let value = parse_document(text, side)?;
    Ok(jsoncmp_diff::pretty(&value))
}

/// Convert the parser's 1-based line and byte column to a character offset.
/// A column of zero designates the start of the line.
fn char_offset(text: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (index, content) in text.split('\n').enumerate() {
        if index + 1 == line {
            let byte_column = column.saturating_sub(1);
            let chars_before = content
                .char_indices()
                .take_while(|(byte, _)| *byte < byte_column)
                .count();
            return offset + chars_before;
        }
        offset += content.chars().count() + 1;
    }
    text.chars().count()
}

/// The parser message without its trailing position, which is reported
/// separately.
fn bare_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match full.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t "));
        assert!(!is_blank(" {} "));
    }

    #[test]
    fn line_counts_newlines_before_offset() {
        let text = "a\nb\nc";
        assert_eq!(line_at_offset(text, 0), 1);
        assert_eq!(line_at_offset(text, 1), 1);
        assert_eq!(line_at_offset(text, 2), 2);
        assert_eq!(line_at_offset(text, 4), 3);
        assert_eq!(line_at_offset(text, 100), 3);
    }

    #[test]
    fn parses_valid_document() {
        let value = parse_document(r#"{"a": [1, null]}"#, Side::First).unwrap();
        assert_eq!(value, json!({"a": [1, null]}));
    }

    #[test]
    fn parse_error_reports_side_and_line() {
        let text = "{\n  \"a\": 1,\n  \"b\": \n}";
        let err = parse_document(text, Side::Second).unwrap_err();
        match err {
            InputError::Parse { side, line, ref message, .. } => {
                assert_eq!(side, Side::Second);
                assert_eq!(line, 4);
                assert!(!message.contains("at line"));
            }
            other => panic!("expected Parse, got {:?}", other),
        }
        assert!(err.to_string().starts_with("invalid JSON in second input at line 4:"));
    }

    #[test]
    fn parse_error_on_first_line() {
        let err = parse_document("{\"a\" 1}", Side::First).unwrap_err();
        assert_eq!(err.side(), Some(Side::First));
        match err {
            InputError::Parse { line, offset, .. } => {
                assert_eq!(line, 1);
                assert!(offset <= 7);
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let err = parse_document("{}\n\nx", Side::First).unwrap_err();
        match err {
            InputError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn char_offset_maps_positions() {
        let text = "ab\ncde\nf";
        assert_eq!(char_offset(text, 1, 1), 0);
        assert_eq!(char_offset(text, 2, 2), 4);
        assert_eq!(char_offset(text, 3, 0), 7);
        assert_eq!(char_offset(text, 2, 99), 6);
        assert_eq!(char_offset(text, 0, 0), 0);
    }

    #[test]
    fn offset_counts_characters_not_bytes() {
        let err = parse_document("{\"ééé\": x}", Side::First).unwrap_err();
        match err {
            InputError::Parse { offset, line, .. } => {
                assert_eq!(offset, 8);
                assert_eq!(line, 1);
            }
            other => panic!("expected Parse, got {:?}", other),
        }

        let err = parse_document("{\n\"éééé\": x}", Side::Second).unwrap_err();
        match err {
            InputError::Parse { offset, line, .. } => {
                assert_eq!(offset, 10);
                assert_eq!(line, 2);
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn char_offset_reads_byte_columns() {
        let text = "\"é\": 1\n\"ü\"";
        assert_eq!(char_offset(text, 1, 5), 3);
        assert_eq!(char_offset(text, 2, 4), 9);
    }

    #[test]
    fn formats_with_two_space_indent() {
        let out = format_document(r#"{"a":{"b":[1]}}"#, Side::First).unwrap();
        assert_eq!(out, "{\n  \"a\": {\n    \"b\": [\n      1\n    ]\n  }\n}");
    }

    #[test]
    fn format_preserves_key_order() {
        let out = format_document(r#"{"z":1,"a":2}"#, Side::First).unwrap();
        assert_eq!(out, "{\n  \"z\": 1,\n  \"a\": 2\n}");
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::First.to_string(), "first");
        assert_eq!(Side::Second.to_string(), "second");
    }
}
