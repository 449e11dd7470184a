//! Change records emitted by the structural diff.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Classification of a single difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// The node exists only in the second document.
    Added,
    /// The node exists only in the first document.
    Removed,
    /// The node exists in both documents with different content.
    Modified,
    /// Never produced by the diff; kept so callers can render full listings.
    Unchanged,
}

impl DiffKind {
    /// Single-character marker used by line-oriented renderers.
    pub fn marker(self) -> char {
        match self {
            DiffKind::Added => '+',
            DiffKind::Removed => '-',
            DiffKind::Modified => '~',
            DiffKind::Unchanged => ' ',
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Modified => "modified",
            DiffKind::Unchanged => "unchanged",
        };
        f.write_str(name)
    }
}

/// One difference between two JSON documents, located by a dotted path.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRecord {
    /// Dotted path to the differing node, or `(root)` for the document itself.
    pub path: String,
    pub kind: DiffKind,
    /// Value in the first document (`Removed` and `Modified`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    /// Value in the second document (`Added` and `Modified`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl DiffRecord {
    pub fn added(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Added,
            old_value: None,
            new_value: Some(value),
        }
    }

    pub fn removed(path: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Removed,
            old_value: Some(value),
            new_value: None,
        }
    }

    pub fn modified(path: impl Into<String>, old: Value, new: Value) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Modified,
            old_value: Some(old),
            new_value: Some(new),
        }
    }

    /// The same difference seen from the other side of the comparison.
    ///
    /// `Added` and `Removed` trade places and `Modified` swaps its values.
    pub fn inverted(&self) -> Self {
        let kind = match self.kind {
            DiffKind::Added => DiffKind::Removed,
            DiffKind::Removed => DiffKind::Added,
            other => other,
        };
        Self {
            path: self.path.clone(),
            kind,
            old_value: self.new_value.clone(),
            new_value: self.old_value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn added_carries_only_new_value() {
        let rec = DiffRecord::added("city", json!("New York"));
        assert_eq!(rec.kind, DiffKind::Added);
        assert!(rec.old_value.is_none());
        assert_eq!(rec.new_value, Some(json!("New York")));
    }

    #[test]
    fn removed_carries_only_old_value() {
        let rec = DiffRecord::removed("y", json!(2));
        assert_eq!(rec.kind, DiffKind::Removed);
        assert_eq!(rec.old_value, Some(json!(2)));
        assert!(rec.new_value.is_none());
    }

    #[test]
    fn inverted_swaps_kind_and_values() {
        let added = DiffRecord::added("y", json!(2));
        assert_eq!(added.inverted(), DiffRecord::removed("y", json!(2)));

        let modified = DiffRecord::modified("a.b", json!(1), json!(2));
        assert_eq!(modified.inverted(), DiffRecord::modified("a.b", json!(2), json!(1)));
    }

    #[test]
    fn serializes_with_camel_case_and_omits_missing_values() {
        let rec = DiffRecord::added("hobbies.2", json!("traveling"));
        let out = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            out,
            json!({"path": "hobbies.2", "kind": "added", "newValue": "traveling"})
        );

        let rec = DiffRecord::modified("age", json!(30), json!(31));
        let out = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            out,
            json!({"path": "age", "kind": "modified", "oldValue": 30, "newValue": 31})
        );
    }

    #[test]
    fn markers_and_names() {
        assert_eq!(DiffKind::Added.marker(), '+');
        assert_eq!(DiffKind::Removed.marker(), '-');
        assert_eq!(DiffKind::Modified.marker(), '~');
        assert_eq!(DiffKind::Modified.to_string(), "modified");
        assert_eq!(DiffKind::Unchanged.to_string(), "unchanged");
    }
}
