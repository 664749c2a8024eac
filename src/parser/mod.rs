//! JSON input sources and parsing
//!
//! The conversion core only ever sees parsed values; this module owns the
//! step from raw text to `serde_json::Value` and surfaces parse failures
//! with their position before conversion starts.

pub mod directory;

use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;

/// A source of JSON input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsonSource {
    /// Raw JSON text passed directly
    Inline(String),
    /// Single JSON file path
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl JsonSource {
    /// Parse JSON from this source
    pub fn parse(&self) -> ParseResult<serde_json::Value> {
        match self {
            JsonSource::Inline(content) => parse_from_str(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
        }
    }

    /// Human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::Inline(_) => "inline JSON".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }

    /// Size of the source in bytes, when it is known without reading it
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            JsonSource::Inline(content) => Some(content.len() as u64),
            JsonSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            JsonSource::Stdin => None,
        }
    }
}

/// Parse JSON text, rejecting empty input up front.
pub fn parse_from_str(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("empty JSON input".to_string(), None));
    }

    serde_json::from_str(trimmed).map_err(|e| {
        let location = (e.line() > 0).then(|| (e.line(), e.column()));
        ParseError::new(format!("invalid JSON: {}", e), location)
    })
}

fn parse_from_file(path: &PathBuf) -> ParseResult<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ParseError::new(format!("failed to read {}: {}", path.display(), e), None)
    })?;

    parse_from_str(&content)
}

fn parse_from_stdin() -> ParseResult<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("failed to read stdin: {}", e), None))?;

    parse_from_str(&buffer)
}
