//! JSON to CSV Converter
//!
//! Converts arbitrary JSON documents (objects or arrays of objects) into
//! flat CSV text: nested objects are flattened to dotted-path columns, the
//! header is the first-seen-order union of keys across all records, and
//! fields are quoted per RFC 4180 when they contain a comma, quote, or
//! newline.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_json_from_source, convert_json_string, convert_json_to_csv, ConversionConfig,
    ConversionMetadata, ConversionStats, CsvData,
};
pub use error::{ConversionError, ConversionErrorKind, ParseError};
pub use formatter::CsvDocument;
pub use parser::JsonSource;

/// Convert a parsed JSON value to CSV text with default configuration
pub fn convert_json(json: &serde_json::Value) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_json_with_config(json, &config)
}

/// Convert a parsed JSON value to CSV text with custom configuration
pub fn convert_json_with_config(
    json: &serde_json::Value,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = convert_json_to_csv(json, config)?;
    Ok(result.content)
}
