//! Structural diff: walk two JSON values in lockstep and report every node
//! at which they differ.
//!
//! Objects are compared key by key over the union of both key sets, arrays
//! index by index up to the longer length. A change of coarse type (say an
//! array replaced by an object) is reported once at the node where it happens
//! and is not descended into.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::record::{DiffKind, DiffRecord};

/// Path reported for differences at the top of the document.
pub const ROOT_PATH: &str = "(root)";

/// The result of structurally comparing two JSON values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuralDiff {
    /// Differences in visitation order.
    pub records: Vec<DiffRecord>,
}

impl StructuralDiff {
    /// Returns `true` if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if the two values were structurally identical.
    pub fn are_equal(&self) -> bool {
        self.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of records of the given kind.
    pub fn count(&self, kind: DiffKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Number of added nodes.
    pub fn additions(&self) -> usize {
        self.count(DiffKind::Added)
    }

    /// Number of removed nodes.
    pub fn removals(&self) -> usize {
        self.count(DiffKind::Removed)
    }

    /// Number of modified nodes.
    pub fn modifications(&self) -> usize {
        self.count(DiffKind::Modified)
    }

    /// Per-kind counts for summary display.
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            added: self.additions(),
            removed: self.removals(),
            modified: self.modifications(),
            unchanged: self.count(DiffKind::Unchanged),
            total: self.len(),
        }
    }

    /// The diff that comparing the values in the opposite order would produce.
    pub fn inverted(&self) -> Self {
        Self {
            records: self.records.iter().map(DiffRecord::inverted).collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a StructuralDiff {
    type Item = &'a DiffRecord;
    type IntoIter = std::slice::Iter<'a, DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Per-kind record counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub total: usize,
}

/// Coarse type classification deciding whether two nodes can be descended
/// into together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoarseType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl CoarseType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => CoarseType::Null,
            Value::Bool(_) => CoarseType::Boolean,
            Value::Number(_) => CoarseType::Number,
            Value::String(_) => CoarseType::String,
            Value::Array(_) => CoarseType::Array,
            Value::Object(_) => CoarseType::Object,
        }
    }
}

/// Compare two values starting at the document root.
pub fn diff_values(left: &Value, right: &Value) -> StructuralDiff {
    StructuralDiff {
        records: diff_at(left, right, ""),
    }
}

/// Compare two values whose position in an enclosing document is `path`.
pub fn diff_at(left: &Value, right: &Value, path: &str) -> Vec<DiffRecord> {
    let mut records = Vec::new();
    walk(left, right, path, &mut records);
    records
}

/// Append `key` to a dotted path. The root has no leading dot.
pub fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// The path as reported on a `Modified` record: empty means the root.
pub fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

fn walk(left: &Value, right: &Value, path: &str, out: &mut Vec<DiffRecord>) {
    if primitives_equal(left, right) {
        return;
    }

    if left.is_null() || right.is_null() || CoarseType::of(left) != CoarseType::of(right) {
        out.push(DiffRecord::modified(display_path(path), left.clone(), right.clone()));
        return;
    }

    match (left, right) {
        (Value::Array(l), Value::Array(r)) => {
            for index in 0..l.len().max(r.len()) {
                let child = join_path(path, &index.to_string());
                visit_member(l.get(index), r.get(index), child, out);
            }
        }
        (Value::Object(l), Value::Object(r)) => {
            let right_only = r.keys().filter(|k| !l.contains_key(*k));
            for key in l.keys().chain(right_only) {
                let child = join_path(path, key);
                visit_member(l.get(key), r.get(key), child, out);
            }
        }
        _ => out.push(DiffRecord::modified(display_path(path), left.clone(), right.clone())),
    }
}

fn visit_member(left: Option<&Value>, right: Option<&Value>, path: String, out: &mut Vec<DiffRecord>) {
    match (left, right) {
        (None, Some(new)) => out.push(DiffRecord::added(path, new.clone())),
        (Some(old), None) => out.push(DiffRecord::removed(path, old.clone())),
        (Some(old), Some(new)) => walk(old, new, &path, out),
        (None, None) => {}
    }
}

/// Equality for scalar values. Arrays and objects never short-circuit here.
fn primitives_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Numeric equality: integers compare exactly, anything involving a float
/// compares as `f64`, so `1` and `1.0` are the same number.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    } else {
        a == b
    }
}
