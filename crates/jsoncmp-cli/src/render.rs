//! Terminal rendering of comparison results.

use colored::Colorize;
use jsoncmp_compare::ComparisonReport;
use jsoncmp_diff::{format_value, DiffKind, DiffLine, DiffRecord, DiffSummary, DocumentDiff};
use serde_json::Value;

/// One block per difference followed by a summary line.
pub fn render_report(report: &ComparisonReport, show_values: bool) -> String {
    let mut out = String::new();
    for record in report.records() {
        out.push_str(&render_record(record, show_values));
        out.push('\n');
    }
    out.push_str(&render_summary(&report.summary()));
    out
}

pub fn render_record(record: &DiffRecord, show_values: bool) -> String {
    let marker = record.kind.marker().to_string();
    let head = format!("{} {}", marker, record.path);
    let head = match record.kind {
        DiffKind::Added => head.green(),
        DiffKind::Removed => head.red(),
        DiffKind::Modified => head.yellow(),
        DiffKind::Unchanged => head.dimmed(),
    };
    if !show_values {
        return head.to_string();
    }

    match (&record.old_value, &record.new_value) {
        (Some(old), Some(new)) => format!(
            "{}: {} {} {}",
            head,
            indent_value(old).red(),
            "→".dimmed(),
            indent_value(new).green()
        ),
        (None, Some(new)) => format!("{}: {}", head, indent_value(new).green()),
        (Some(old), None) => format!("{}: {}", head, indent_value(old).red()),
        (None, None) => head.to_string(),
    }
}

pub fn render_summary(summary: &DiffSummary) -> String {
    if summary.total == 0 {
        return format!("{} No differences found.", "✓".green().bold());
    }
    let noun = if summary.total == 1 { "difference" } else { "differences" };
    format!(
        "{} {}: {} added, {} removed, {} modified",
        summary.total.to_string().bold(),
        noun,
        summary.added.to_string().green(),
        summary.removed.to_string().red(),
        summary.modified.to_string().yellow()
    )
}

pub fn render_document_diff(diff: &DocumentDiff) -> String {
    let mut out = String::new();
    for hunk in &diff.hunks {
        out.push_str(&hunk.header().cyan().to_string());
        out.push('\n');
        for line in &hunk.lines {
            let rendered = match line {
                DiffLine::Both(text) => format!(" {}", text).normal(),
                DiffLine::SecondOnly(text) => format!("+{}", text).green(),
                DiffLine::FirstOnly(text) => format!("-{}", text).red(),
            };
            out.push_str(&rendered.to_string());
            out.push('\n');
        }
    }
    out
}

/// Continuation lines of multi-line values are indented under the record.
fn indent_value(value: &Value) -> String {
    format_value(value).replace('\n', "\n    ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsoncmp_compare::compare;
    use serde_json::json;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_each_kind() {
        plain();
        assert_eq!(render_record(&DiffRecord::added("city", json!("New York")), true), "+ city: New York");
        assert_eq!(render_record(&DiffRecord::removed("y", json!(2)), true), "- y: 2");
        assert_eq!(
            render_record(&DiffRecord::modified("age", json!(30), json!(31)), true),
            "~ age: 30 → 31"
        );
    }

    #[test]
    fn hides_values_when_asked() {
        plain();
        assert_eq!(render_record(&DiffRecord::modified("a.b", json!(1), json!(2)), false), "~ a.b");
    }

    #[test]
    fn composite_values_are_indented() {
        plain();
        let out = render_record(&DiffRecord::added("list", json!([1])), true);
        assert_eq!(out, "+ list: [\n      1\n    ]");
    }

    #[test]
    fn summary_lines() {
        plain();
        assert_eq!(render_summary(&DiffSummary::default()), "✓ No differences found.");
        let report = compare(r#"{"a":1}"#, r#"{"a":2,"b":3}"#).unwrap();
        let text = render_report(&report, true);
        assert!(text.ends_with("2 differences: 1 added, 0 removed, 1 modified"));
        assert!(text.starts_with("~ a: 1 → 2\n+ b: 3\n"));
    }

    #[test]
    fn document_diff_lines() {
        plain();
        let report = compare(r#"{"a":1}"#, r#"{"a":2}"#).unwrap();
        let text = render_document_diff(&report.document_diff(1));
        assert!(text.starts_with("@@ -1,3 +1,3 @@\n"));
        assert!(text.contains("-  \"a\": 1\n"));
        assert!(text.contains("+  \"a\": 2\n"));
    }
}
