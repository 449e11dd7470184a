//! Built-in example documents for trying out a comparison.

use serde_json::{json, Value};

/// A pair of documents that differ by one modification and two additions.
pub fn sample_pair() -> (Value, Value) {
    let first = json!({
        "name": "John",
        "age": 30,
        "hobbies": ["reading", "coding"]
    });
    let second = json!({
        "name": "John",
        "age": 31,
        "hobbies": ["reading", "coding", "traveling"],
        "city": "New York"
    });
    (first, second)
}
