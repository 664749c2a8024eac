//! CSV rendering
//!
//! Three phases of one conversion: flatten each record, derive the column
//! union, render the header and data rows.

pub mod columns;
pub mod escape;
pub mod flatten;

pub use columns::ColumnSet;
pub use escape::{escape_field, escape_value};
pub use flatten::flatten_record;

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use serde_json::{Map, Value};

/// Rendered CSV text with its derived shape.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub content: String,
    pub row_count: usize,
    pub column_count: usize,
}

/// Render a normalized record list as CSV.
///
/// The output is the header row followed by one row per record, joined with
/// `\n` and no trailing newline. Cells missing from a record relative to the
/// column union render empty. Fails with `NoColumns` when every record
/// flattens to zero keys.
pub fn format_to_csv(records: &[&Value]) -> ConversionResult<CsvDocument> {
    let flattened: Vec<Map<String, Value>> =
        records.iter().map(|record| flatten_record(record)).collect();

    let columns = ColumnSet::from_records(&flattened);
    if columns.is_empty() {
        return Err(ConversionError::conversion(ConversionErrorKind::NoColumns));
    }

    let mut lines = Vec::with_capacity(flattened.len() + 1);

    let header: Vec<String> = columns.iter().map(escape_field).collect();
    lines.push(header.join(","));

    for record in &flattened {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| record.get(column).map(escape_value).unwrap_or_default())
            .collect();
        lines.push(cells.join(","));
    }

    Ok(CsvDocument {
        content: lines.join("\n"),
        row_count: flattened.len(),
        column_count: columns.len(),
    })
}
