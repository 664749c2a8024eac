//! Unit tests for CSV field escaping, including the round trip through a
//! standard CSV reader

use csvconv::conversion::{convert_json_string, ConversionConfig};
use csvconv::formatter::escape_field;
use pretty_assertions::assert_eq;

#[test]
fn test_plain_values_stay_bare() {
    assert_eq!(escape_field("hello"), "hello");
    assert_eq!(escape_field("two words"), "two words");
    assert_eq!(escape_field(" leading and trailing "), " leading and trailing ");
}

#[test]
fn test_special_characters_force_quoting() {
    assert_eq!(escape_field("a,b"), "\"a,b\"");
    assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
    assert_eq!(escape_field("the \"word\""), "\"the \"\"word\"\"\"");
}

#[test]
fn test_combined_specials_single_quoted_field() {
    let rendered = escape_field("He said, \"hi\"\nbye");
    assert_eq!(rendered, "\"He said, \"\"hi\"\"\nbye\"");
}

#[test]
fn test_escaped_field_round_trips_through_csv_reader() {
    let original = "He said, \"hi\"\nbye";
    let json = serde_json::json!([{"note": original}]);
    let csv_text = csvconv::convert_json(&json).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "note");

    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[0], original);
}

#[test]
fn test_multi_column_round_trip() {
    let json = serde_json::json!([
        {"id": 1, "text": "a,b", "quote": "say \"x\""},
        {"id": 2, "text": "plain", "quote": "line\nsplit"}
    ]);
    let csv_text = csvconv::convert_json(&json).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "a,b");
    assert_eq!(&rows[0][2], "say \"x\"");
    assert_eq!(&rows[1][2], "line\nsplit");
}

#[test]
fn test_header_containing_comma_is_quoted() {
    let result = convert_json_string(
        r#"{"first,last": "Ada Lovelace"}"#,
        &ConversionConfig::default(),
    )
    .unwrap();

    assert_eq!(result.content, "\"first,last\"\nAda Lovelace");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(result.content.as_bytes());
    assert_eq!(&reader.headers().unwrap()[0], "first,last");
}

#[test]
fn test_numbers_and_booleans_render_unquoted() {
    let result =
        convert_json_string(r#"{"n": 12.5, "b": false}"#, &ConversionConfig::default()).unwrap();
    assert_eq!(result.content, "n,b\n12.5,false");
}
