//! Human-readable rendering of JSON values.

use serde_json::{Number, Value};

/// Render a value for display next to a difference.
///
/// Arrays and objects are pretty-printed with a two-space indent, strings
/// are shown without quotes, and everything else uses its plain text form.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => pretty(value),
    }
}

/// Pretty-print a value as JSON text with a two-space indent.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Integral floats print in positional integer form (`1.0` as `1`, `1e20` as
/// `100000000000000000000`) below 1e21; from 1e21 on, exponent form is kept.
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
