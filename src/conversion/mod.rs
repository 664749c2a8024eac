//! JSON to CSV conversion module
//!
//! This module contains the core conversion logic, configuration, resource
//! limits, and statistics.

pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use config::ConversionConfig;
pub use engine::{
    convert_json_from_source, convert_json_string, convert_json_to_csv, ConversionMetadata,
    CsvData,
};
pub use stats::ConversionStats;
