//! Core conversion engine for JSON to CSV transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use crate::formatter::format_to_csv;
use crate::parser::JsonSource;
use serde_json::Value;
use std::time::Instant;

/// Core conversion result
#[derive(Debug, Clone)]
pub struct CsvData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl CsvData {
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered CSV output
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone)]
pub struct ConversionMetadata {
    /// Number of data rows (header excluded)
    pub row_count: usize,
    /// Number of columns in the derived header
    pub column_count: usize,
    pub input_size: u64,
    pub output_size: u64,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert a parsed JSON value to CSV.
    ///
    /// Fails without partial output when the input is `null`, an empty
    /// array, a bare scalar, or flattens to no columns at all.
    pub fn convert(&self, json: &Value) -> ConversionResult<CsvData> {
        let start_time = Instant::now();

        let input_size = limits::check_json_value_size(json, &self.config)?;

        let records = normalize_records(json)?;
        let document = format_to_csv(&records)?;

        let metadata = ConversionMetadata {
            row_count: document.row_count,
            column_count: document.column_count,
            input_size,
            output_size: document.content.len() as u64,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(CsvData::new(document.content, metadata))
    }

    /// Convert JSON from a source to CSV
    pub fn convert_from_source(&self, source: &JsonSource) -> ConversionResult<CsvData> {
        // Check source size before reading to avoid loading very large files
        limits::check_source_size_before_read(source, &self.config)?;

        let json_value = source.parse().map_err(ConversionError::ParseError)?;
        self.convert(&json_value)
    }

    /// Convert a JSON string to CSV
    pub fn convert_string(&self, json_str: &str) -> ConversionResult<CsvData> {
        let source = JsonSource::Inline(json_str.to_string());
        self.convert_from_source(&source)
    }
}

/// Normalize the input into the list of records to render.
///
/// An array contributes its elements in order; a single object becomes a
/// one-element list. Anything else is rejected here, before flattening.
fn normalize_records(json: &Value) -> ConversionResult<Vec<&Value>> {
    match json {
        Value::Null => Err(ConversionError::conversion(ConversionErrorKind::EmptyInput)),
        Value::Array(items) if items.is_empty() => {
            Err(ConversionError::conversion(ConversionErrorKind::EmptyArray))
        }
        Value::Array(items) => Ok(items.iter().collect()),
        Value::Object(_) => Ok(vec![json]),
        _ => Err(ConversionError::conversion(
            ConversionErrorKind::InvalidStructure,
        )),
    }
}

/// Convert a JSON value to CSV
pub fn convert_json_to_csv(json: &Value, config: &ConversionConfig) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(json)
}

/// Convert JSON from a source to CSV
pub fn convert_json_from_source(
    source: &JsonSource,
    config: &ConversionConfig,
) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_from_source(source)
}

/// Convert a JSON string to CSV
pub fn convert_json_string(json_str: &str, config: &ConversionConfig) -> ConversionResult<CsvData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_string(json_str)
}
