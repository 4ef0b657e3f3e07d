// crates/core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a fixture file into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Fixture file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Permission denied reading fixture: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {message}")]
    MalformedJson { path: PathBuf, message: String },

    #[error("Fixture {path} is not a JSON array of records")]
    NotAnArray { path: PathBuf },

    #[error("Record {record} in {path} is not a flat JSON object")]
    NotAnObject { path: PathBuf, record: usize },

    #[error("Record {record} in {path} has a nested value in field '{field}' (records must be flat)")]
    NestedValue {
        path: PathBuf,
        record: usize,
        field: String,
    },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

/// A single field failed to format. Carries no record position; the
/// generator wraps this with the record index via [`GenerateError::field`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("value '{value}' does not match the expected date/time pattern")]
    DateFormat { value: String },

    #[error("expected {expected}")]
    TypeMismatch { expected: &'static str },
}

/// Errors that can occur while generating seed code from records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Record {record} is missing required field '{field}'")]
    MissingField { record: usize, field: String },

    #[error("Record {record}, field '{field}': value '{value}' does not match the expected date/time pattern")]
    DateFormat {
        record: usize,
        field: String,
        value: String,
    },

    #[error("Record {record}, field '{field}': expected {expected}")]
    TypeMismatch {
        record: usize,
        field: String,
        expected: &'static str,
    },
}

impl GenerateError {
    pub fn missing_field(record: usize, field: impl Into<String>) -> Self {
        Self::MissingField {
            record,
            field: field.into(),
        }
    }

    /// Attach record position and field name to a field-level failure.
    pub fn field(record: usize, field: impl Into<String>, err: FieldError) -> Self {
        let field = field.into();
        match err {
            FieldError::DateFormat { value } => Self::DateFormat {
                record,
                field,
                value,
            },
            FieldError::TypeMismatch { expected } => Self::TypeMismatch {
                record,
                field,
                expected,
            },
        }
    }
}

/// Errors that can occur while scanning a fixture for duplicate
/// identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("Record {record} is missing key field '{field}'")]
    MissingField { record: usize, field: String },
}

impl ScanError {
    pub fn missing_field(record: usize, field: impl Into<String>) -> Self {
        Self::MissingField {
            record,
            field: field.into(),
        }
    }
}

/// Errors that can occur while persisting generated output.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist output to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// An entity name the catalogue doesn't know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown entity kind '{0}' (expected category, image, location, review, schedule, or tour)")]
pub struct UnknownEntity(pub String);
