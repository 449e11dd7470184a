//! Line view of a comparison: the two documents are pretty-printed and
//! diffed line by line with `similar` (Myers), grouped into hunks.
//!
//! The structural diff stays the authoritative list of changes; this view
//! only shows where they land in the rendered text.

use serde_json::Value;
use similar::{ChangeTag, TextDiff};

use crate::display::pretty;

/// Line diff between the pretty-printed first and second documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentDiff {
    pub hunks: Vec<DiffHunk>,
    pub first_line_count: usize,
    pub second_line_count: usize,
}

impl DocumentDiff {
    /// Both documents render to the same text.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    pub fn inserted_lines(&self) -> usize {
        self.count_lines(|l| matches!(l, DiffLine::SecondOnly(_)))
    }

    pub fn deleted_lines(&self) -> usize {
        self.count_lines(|l| matches!(l, DiffLine::FirstOnly(_)))
    }

    fn count_lines(&self, pred: impl Fn(&DiffLine) -> bool) -> usize {
        self.hunks.iter().flat_map(|h| &h.lines).filter(|l| pred(l)).count()
    }
}

/// A span of lines in one of the rendered documents. `start` is 1-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub count: usize,
}

/// Changed lines plus their surrounding context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffHunk {
    pub first: LineRange,
    pub second: LineRange,
    pub lines: Vec<DiffLine>,
}

impl DiffHunk {
    /// `@@ -first +second @@`, as in a unified diff.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.first.start, self.first.count, self.second.start, self.second.count
        )
    }
}

/// One rendered line and the document(s) it appears in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffLine {
    Both(String),
    FirstOnly(String),
    SecondOnly(String),
}

/// Diff the pretty-printed forms of two values with `context` unchanged
/// lines kept around each change.
pub fn diff_documents(first: &Value, second: &Value, context: usize) -> DocumentDiff {
    let first_text = pretty(first);
    let second_text = pretty(second);

    let mut diff = DocumentDiff {
        hunks: Vec::new(),
        first_line_count: first_text.lines().count(),
        second_line_count: second_text.lines().count(),
    };
    if first_text == second_text {
        return diff;
    }

    let lines = TextDiff::from_lines(&first_text, &second_text);
    for group in lines.grouped_ops(context) {
        let Some(op) = group.first() else { continue };
        let mut hunk = DiffHunk {
            first: LineRange { start: op.old_range().start + 1, count: 0 },
            second: LineRange { start: op.new_range().start + 1, count: 0 },
            lines: Vec::new(),
        };

        for change in group.iter().flat_map(|op| lines.iter_changes(op)) {
            let text = change.value().trim_end_matches('\n').to_string();
            let line = match change.tag() {
                ChangeTag::Equal => {
                    hunk.first.count += 1;
                    hunk.second.count += 1;
                    DiffLine::Both(text)
                }
                ChangeTag::Delete => {
                    hunk.first.count += 1;
                    DiffLine::FirstOnly(text)
                }
                ChangeTag::Insert => {
                    hunk.second.count += 1;
                    DiffLine::SecondOnly(text)
                }
            };
            hunk.lines.push(line);
        }

        diff.hunks.push(hunk);
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_documents_no_hunks() {
        let v = json!({"a": [1, 2, 3]});
        let diff = diff_documents(&v, &v, 3);
        assert!(diff.is_empty());
        assert_eq!(diff.first_line_count, diff.second_line_count);
    }

    #[test]
    fn changed_scalar_replaces_one_line() {
        let diff = diff_documents(&json!({"age": 30}), &json!({"age": 31}), 3);
        assert_eq!(diff.hunks.len(), 1);
        assert_eq!(diff.inserted_lines(), 1);
        assert_eq!(diff.deleted_lines(), 1);
        assert!(diff.hunks[0]
            .lines
            .contains(&DiffLine::SecondOnly("  \"age\": 31".to_string())));
    }

    #[test]
    fn appended_element_inserts_lines() {
        let diff = diff_documents(&json!(["reading"]), &json!(["reading", "coding"]), 1);
        assert!(diff.inserted_lines() >= 1);
        assert_eq!(diff.first_line_count, 3);
        assert_eq!(diff.second_line_count, 4);
    }

    #[test]
    fn hunk_ranges_are_one_based() {
        let diff = diff_documents(&json!([1, 2, 3, 4, 5]), &json!([1, 2, 9, 4, 5]), 1);
        let hunk = &diff.hunks[0];
        assert_eq!(hunk.first, LineRange { start: 3, count: 3 });
        assert_eq!(hunk.second, LineRange { start: 3, count: 3 });
        assert_eq!(hunk.header(), "@@ -3,3 +3,3 @@");
    }

    #[test]
    fn context_lines_surround_change() {
        let diff = diff_documents(&json!([1, 2, 3, 4, 5]), &json!([1, 2, 9, 4, 5]), 2);
        assert!(diff.hunks[0].lines.iter().any(|l| matches!(l, DiffLine::Both(_))));
    }

    #[test]
    fn zero_context_keeps_only_changed_lines() {
        let diff = diff_documents(&json!([1, 2, 3]), &json!([1, 5, 3]), 0);
        let shared = diff
            .hunks
            .iter()
            .flat_map(|h| &h.lines)
            .any(|l| matches!(l, DiffLine::Both(_)));
        assert!(!shared);
    }
}
