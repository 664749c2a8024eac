//! CSV field escaping
//!
//! Fields are quoted only when they contain a character that would break the
//! row structure: a comma, a double quote, or a newline. Inside a quoted
//! field every double quote is doubled. Everything else is emitted verbatim,
//! including leading and trailing whitespace.

use serde_json::Value;

/// Render a flattened cell value as a CSV field.
///
/// `null` renders as the empty string. Strings are used as-is (no JSON
/// quoting); numbers and booleans use their JSON text representation.
pub fn escape_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => escape_field(s),
        other => escape_field(&other.to_string()),
    }
}

/// Apply the quoting rule to a raw field string.
pub fn escape_field(field: &str) -> String {
    if !needs_quoting(field) {
        return field.to_string();
    }

    let mut quoted = String::with_capacity(field.len() + 2);
    quoted.push('"');
    for ch in field.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn needs_quoting(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n')
}
