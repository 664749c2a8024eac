//! Resource limit checks for the conversion pipeline

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use crate::parser::JsonSource;
use serde_json::Value;

/// Check the source size before attempting to read or parse the JSON.
/// Avoids loading a file the configured limit would reject anyway.
pub fn check_source_size_before_read(
    source: &JsonSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    if let Some(size) = source.estimated_size() {
        if size > config.memory_limit as u64 {
            return Err(ConversionError::conversion(
                ConversionErrorKind::JsonTooLarge {
                    size: size as usize,
                    limit: config.memory_limit,
                },
            ));
        }
    }

    Ok(())
}

/// Check the parsed value against the configured limit, using its serialized
/// length as the size measure. Returns the measured size in bytes.
pub fn check_json_value_size(json: &Value, config: &ConversionConfig) -> ConversionResult<u64> {
    let serialized = serde_json::to_string(json).map_err(|e| {
        ConversionError::conversion_with_source(
            ConversionErrorKind::io(format!("failed to measure input: {}", e), None),
            e.into(),
        )
    })?;

    let size = serialized.len() as u64;
    if size > config.memory_limit as u64 {
        return Err(ConversionError::conversion(
            ConversionErrorKind::MemoryLimitExceeded {
                size: size as usize,
                limit: config.memory_limit,
            },
        ));
    }

    Ok(size)
}
