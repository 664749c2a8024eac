//! Unit tests for string-to-CSV conversion
//!
//! Tests cover:
//! - Basic JSON object and array conversion
//! - Column derivation across heterogeneous records
//! - Error handling for invalid input shapes
//! - Row and column counts

use assert_matches::assert_matches;
use csvconv::conversion::{convert_json_string, ConversionConfig};
use csvconv::error::{ConversionError, ConversionErrorKind};
use pretty_assertions::assert_eq;

fn convert(json: &str) -> Result<csvconv::CsvData, ConversionError> {
    convert_json_string(json, &ConversionConfig::default())
}

#[test]
fn test_basic_object_conversion() {
    let result = convert(r#"{"name": "Alice", "age": 30, "active": true}"#).unwrap();

    assert_eq!(result.content, "name,age,active\nAlice,30,true");
    assert_eq!(result.metadata.row_count, 1);
    assert_eq!(result.metadata.column_count, 3);
}

#[test]
fn test_array_of_flat_objects() {
    let result = convert(r#"[{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]"#).unwrap();

    assert_eq!(result.content, "id,name\n1,Alice\n2,Bob");
    assert_eq!(result.metadata.row_count, 2);
}

#[test]
fn test_column_union_counts_distinct_keys() {
    let result = convert(r#"[{"a": 1, "b": 2}, {"b": 3, "c": 4}, {"d": 5}]"#).unwrap();

    assert_eq!(result.metadata.row_count, 3);
    assert_eq!(result.metadata.column_count, 4);
    assert!(result.content.starts_with("a,b,c,d\n"));
}

#[test]
fn test_columns_ordered_by_first_appearance() {
    let result = convert(r#"[{"z": 1}, {"a": 2, "z": 3}, {"m": 4}]"#).unwrap();
    assert_eq!(result.content.lines().next().unwrap(), "z,a,m");
}

#[test]
fn test_nested_object_flattens_to_dotted_column() {
    let result = convert(r#"{"a": {"b": {"c": 1}}}"#).unwrap();
    assert_eq!(result.content, "a.b.c\n1");
}

#[test]
fn test_array_value_serialized_not_expanded() {
    let result = convert(r#"{"a": [1, 2, 3]}"#).unwrap();

    assert_eq!(result.metadata.column_count, 1);
    // The cell is the literal JSON text, quoted because of its commas
    assert_eq!(result.content, "a\n\"[1,2,3]\"");
}

#[test]
fn test_mixed_records_scenario() {
    let result =
        convert(r#"[{"id": 1, "tags": ["x", "y"]}, {"id": 2, "name": {"first": "A"}}]"#).unwrap();

    assert_eq!(
        result.content,
        "id,tags,name.first\n1,\"[\"\"x\"\",\"\"y\"\"]\",\n2,,A"
    );
}

#[test]
fn test_null_values_and_missing_keys_render_empty() {
    let result = convert(r#"[{"a": null, "b": 1}, {"b": 2}]"#).unwrap();
    assert_eq!(result.content, "a,b\n,1\n,2");
}

#[test]
fn test_primitive_array_elements_use_value_column() {
    let result = convert(r#"[1, "two", true]"#).unwrap();
    assert_eq!(result.content, "value\n1\ntwo\ntrue");
}

#[test]
fn test_mixed_primitives_and_objects() {
    let result = convert(r#"[{"a": 1}, "loose"]"#).unwrap();
    assert_eq!(result.content, "a,value\n1,\n,loose");
}

#[test]
fn test_duplicate_dotted_path_last_write_wins() {
    let result = convert(r#"{"a": {"b": 1}, "a.b": 2}"#).unwrap();
    assert_eq!(result.content, "a.b\n2");
}

#[test]
fn test_null_input_rejected() {
    let err = convert("null").unwrap_err();
    assert_matches!(err.kind(), Some(ConversionErrorKind::EmptyInput));
    assert_eq!(err.user_message(), "no data provided");
}

#[test]
fn test_empty_array_rejected() {
    let err = convert("[]").unwrap_err();
    assert_matches!(err.kind(), Some(ConversionErrorKind::EmptyArray));
    assert_eq!(err.user_message(), "empty array provided");
}

#[test]
fn test_bare_scalars_rejected() {
    for input in [r#""hello""#, "42", "true"] {
        let err = convert(input).unwrap_err();
        assert_matches!(err.kind(), Some(ConversionErrorKind::InvalidStructure));
    }
}

#[test]
fn test_array_of_empty_objects_rejected() {
    let err = convert("[{}, {}]").unwrap_err();
    assert_matches!(err.kind(), Some(ConversionErrorKind::NoColumns));
    assert_eq!(err.user_message(), "no columns found in data");
}

#[test]
fn test_invalid_json_is_parse_error_with_location() {
    let err = convert(r#"{"name": "test", "value": }"#).unwrap_err();
    match err {
        ConversionError::ParseError(parse) => {
            assert!(parse.location.is_some());
        }
        other => panic!("expected parse error, got: {:?}", other),
    }
}

#[test]
fn test_empty_input_is_parse_error() {
    let err = convert("").unwrap_err();
    assert_matches!(err, ConversionError::ParseError(_));
}

#[test]
fn test_convenience_api_returns_text() {
    let value = serde_json::json!({"k": "v"});
    assert_eq!(csvconv::convert_json(&value).unwrap(), "k\nv");
}
