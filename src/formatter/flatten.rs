//! Record flattening
//!
//! Nested objects collapse into a single-level mapping keyed by dot-joined
//! paths. Arrays are terminal at any depth: the cell holds the array's
//! compact JSON text and elements are never expanded into columns.

use serde_json::{Map, Value};

/// Flatten one record into a dotted-path mapping.
///
/// Object records descend recursively; a record that is not an object (a
/// primitive array element, or an array treated as a scalar) becomes the
/// single-key mapping `{"value": <scalar>}`.
pub fn flatten_record(record: &Value) -> Map<String, Value> {
    let mut flat = Map::new();
    match record {
        Value::Object(fields) => flatten_into(fields, None, &mut flat),
        other => {
            flat.insert("value".to_string(), terminal_value(other));
        }
    }
    flat
}

fn flatten_into(fields: &Map<String, Value>, prefix: Option<&str>, out: &mut Map<String, Value>) {
    for (key, value) in fields {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            // Duplicate dotted paths overwrite: last write wins
            Value::Object(nested) => flatten_into(nested, Some(&path), out),
            other => {
                out.insert(path, terminal_value(other));
            }
        }
    }
}

fn terminal_value(value: &Value) -> Value {
    match value {
        Value::Array(_) => Value::String(value.to_string()),
        other => other.clone(),
    }
}
