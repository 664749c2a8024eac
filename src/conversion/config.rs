//! Configuration options for JSON to CSV conversion
//!
//! The CSV dialect itself is fixed (comma, double quotes, `\n`); what the
//! configuration carries are resource limits for the surrounding pipeline.

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Maximum input size in bytes, checked before reading and after parsing
    pub memory_limit: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration suited to small files (<1MB)
    pub fn small_files() -> Self {
        Self {
            memory_limit: 10 * 1024 * 1024, // 10MB
        }
    }

    /// Create configuration suited to large files
    pub fn large_files() -> Self {
        Self {
            memory_limit: 1024 * 1024 * 1024, // 1GB
        }
    }

    /// Set the memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_limit < 1024 {
            return Err("memory limit must be at least 1KB".to_string());
        }
        Ok(())
    }
}
