//! Column set derivation
//!
//! The header is the union of all flattened keys, ordered by first
//! appearance: record 0's keys first, then each later record's unseen keys.

use indexmap::IndexSet;
use serde_json::{Map, Value};

/// The ordered set of distinct flattened keys across all records.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: IndexSet<String>,
}

impl ColumnSet {
    /// Derive the column set from flattened records in original order.
    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let mut columns = IndexSet::new();
        for record in records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|s| s.as_str())
    }
}
