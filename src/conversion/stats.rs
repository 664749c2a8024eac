//! Statistics tracking for conversion runs

use crate::conversion::engine::ConversionMetadata;
use serde::{Deserialize, Serialize};

/// Aggregated statistics across one or more conversions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of successful conversions
    pub converted: usize,
    /// Number of failed conversions
    pub failed: usize,
    /// Total input JSON size in bytes
    pub input_bytes: u64,
    /// Total output CSV size in bytes
    pub output_bytes: u64,
    /// Total data rows rendered
    pub total_rows: usize,
    /// Widest header seen across conversions
    pub max_columns: usize,
    /// Total processing time in milliseconds
    pub elapsed_ms: u64,
    /// When these statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStats {
    fn default() -> Self {
        Self {
            converted: 0,
            failed: 0,
            input_bytes: 0,
            output_bytes: 0,
            total_rows: 0,
            max_columns: 0,
            elapsed_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful conversion
    pub fn record_success(&mut self, metadata: &ConversionMetadata) {
        self.converted += 1;
        self.input_bytes += metadata.input_size;
        self.output_bytes += metadata.output_size;
        self.total_rows += metadata.row_count;
        self.max_columns = self.max_columns.max(metadata.column_count);
        self.elapsed_ms += metadata.processing_time_ms;
        self.collected_at = chrono::Utc::now();
    }

    /// Record one failed conversion
    pub fn record_failure(&mut self) {
        self.failed += 1;
        self.collected_at = chrono::Utc::now();
    }

    /// Total number of conversions attempted
    pub fn attempted(&self) -> usize {
        self.converted + self.failed
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} converted, {} failed, {} rows, {} bytes in, {} bytes out, {}ms",
            self.converted,
            self.failed,
            self.total_rows,
            self.input_bytes,
            self.output_bytes,
            self.elapsed_ms
        )
    }
}
