// crates/core/src/input.rs
//! Fixture loading: one JSON document in, a validated record sequence out.

use crate::error::LoadError;
use crate::record::Record;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read and parse one fixture file into records.
///
/// The document must be a JSON array of flat objects; every field value
/// must be a scalar (string, number, boolean, or null). The file handle is
/// released as soon as the read completes.
///
/// # Errors
/// - [`LoadError::NotFound`] / [`LoadError::PermissionDenied`] /
///   [`LoadError::Io`] for filesystem failures, classified by error kind
/// - [`LoadError::MalformedJson`] when the document doesn't parse
/// - [`LoadError::NotAnArray`] / [`LoadError::NotAnObject`] /
///   [`LoadError::NestedValue`] when the shape isn't a flat record sequence
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

    let document: Value = serde_json::from_str(&text).map_err(|e| LoadError::MalformedJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let Value::Array(items) = document else {
        return Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(LoadError::NotAnObject {
                path: path.to_path_buf(),
                record: index,
            });
        };
        for (field, value) in &map {
            if value.is_object() || value.is_array() {
                return Err(LoadError::NestedValue {
                    path: path.to_path_buf(),
                    record: index,
                    field: field.clone(),
                });
            }
        }
        records.push(Record(map));
    }

    debug!(path = %path.display(), records = records.len(), "loaded fixture");
    Ok(records)
}
