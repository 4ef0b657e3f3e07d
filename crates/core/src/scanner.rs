// crates/core/src/scanner.rs
//! Duplicate-identifier scanning over a loaded fixture.

use crate::error::ScanError;
use crate::record::Record;
use serde_json::Value;
use std::collections::HashMap;

/// Count occurrences of each key-field value and return only the keys
/// that appear more than once.
///
/// Keys are compared by their scalar rendering, so numeric and string
/// identifiers both group correctly. The returned map carries no iteration
/// order guarantee; counts are exact and stable across repeated scans.
///
/// # Errors
/// [`ScanError::MissingField`] when a record lacks the key field.
pub fn scan_duplicates(
    records: &[Record],
    key_field: &str,
) -> Result<HashMap<String, usize>, ScanError> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        let value = record
            .field(key_field)
            .ok_or_else(|| ScanError::missing_field(index, key_field))?;
        let key = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    counts.retain(|_, count| *count > 1);
    Ok(counts)
}
