// crates/core/src/generator.rs
//! The record-to-text generator: one formatted block per record, separators
//! strictly between blocks, deterministic output.

use crate::error::GenerateError;
use crate::format::{format_value, DateTimePolicy, SemanticType};
use crate::record::Record;
use crate::template::Template;
use serde_json::Value;
use tracing::debug;

/// Where one emitted column's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// A record field, looked up by its JSON name.
    Field(&'static str),
    /// A hardcoded constant, the same for every record (the review
    /// fixture's Customer_Id).
    Constant(&'static str),
}

/// One emitted column: the property name written to the output, the value
/// source, and the semantic type driving its formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub column: &'static str,
    pub source: ValueSource,
    pub kind: SemanticType,
}

impl FieldSpec {
    /// Column whose JSON name matches its emitted name.
    pub const fn new(column: &'static str, kind: SemanticType) -> Self {
        Self {
            column,
            source: ValueSource::Field(column),
            kind,
        }
    }

    /// Column emitted under a different name than its JSON field.
    ///
    /// Errors always report the JSON field name, which is what an operator
    /// fixing the fixture needs.
    pub const fn renamed(column: &'static str, json_name: &'static str, kind: SemanticType) -> Self {
        Self {
            column,
            source: ValueSource::Field(json_name),
            kind,
        }
    }

    /// Column backed by a hardcoded constant instead of record data.
    pub const fn constant(column: &'static str, value: &'static str, kind: SemanticType) -> Self {
        Self {
            column,
            source: ValueSource::Constant(value),
            kind,
        }
    }

    /// The name errors report: the JSON field for record-backed columns,
    /// the emitted column for constants (which have no JSON field).
    fn error_name(&self) -> &'static str {
        match self.source {
            ValueSource::Field(json_name) => json_name,
            ValueSource::Constant(_) => self.column,
        }
    }
}

/// Per-run generation configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub datetime_policy: DateTimePolicy,
}

/// Render `records` into a single text blob: header, one block per record
/// in input order, the separator strictly between consecutive blocks, the
/// footer at the end.
///
/// Pure and deterministic: identical inputs produce byte-identical output.
/// An empty record sequence reproduces the dangling wrapper the legacy
/// seed scripts emitted (header immediately followed by footer).
///
/// # Errors
/// - [`GenerateError::MissingField`] when a record lacks a configured field
/// - [`GenerateError::DateFormat`] when a date/time value fails to parse
///   (unless the null-substitution policy is selected)
/// - [`GenerateError::TypeMismatch`] when a value's JSON type doesn't fit
///   its semantic type
///
/// Every error names the offending record's position and field.
pub fn generate(
    records: &[Record],
    fields: &[FieldSpec],
    template: &Template,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let mut blocks: Vec<String> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let mut rendered: Vec<(&str, String)> = Vec::with_capacity(fields.len());
        for spec in fields {
            let constant_value;
            let value: &Value = match spec.source {
                ValueSource::Field(json_name) => record
                    .field(json_name)
                    .ok_or_else(|| GenerateError::missing_field(index, json_name))?,
                ValueSource::Constant(text) => {
                    constant_value = Value::String(text.to_string());
                    &constant_value
                }
            };
            let literal = format_value(spec.kind, value, options.datetime_policy)
                .map_err(|e| GenerateError::field(index, spec.error_name(), e))?;
            rendered.push((spec.column, literal));
        }
        blocks.push(template.render_block(&rendered));
    }

    debug!(records = records.len(), "generated seed blocks");

    let mut output = template.header.clone();
    output.push_str(&blocks.join(&template.separator));
    if !blocks.is_empty() {
        output.push_str(&template.terminator);
    }
    output.push_str(&template.footer);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn records(values: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(values).unwrap()
    }

    const LOCATION_FIELDS: &[FieldSpec] = &[
        FieldSpec::new("Id", SemanticType::Text),
        FieldSpec::new("Name", SemanticType::Text),
    ];

    #[test]
    fn test_single_record_block() {
        let recs = records(json!([{"Id": "L001", "Name": "Da Nang"}]));
        let out = generate(
            &recs,
            LOCATION_FIELDS,
            &Template::has_data("Location"),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert_eq!(
            out,
            "modelBuilder.Entity<Location>().HasData(\n    new Location\n    {\n        Id = \"L001\",\n        Name = \"Da Nang\"\n    }\n);"
        );
    }

    #[test]
    fn test_separators_strictly_between_blocks() {
        let recs = records(json!([
            {"Id": "L001", "Name": "Da Nang"},
            {"Id": "L002", "Name": "Hue"},
            {"Id": "L003", "Name": "Hoi An"},
        ]));
        let out = generate(
            &recs,
            LOCATION_FIELDS,
            &Template::has_data("Location"),
            &GenerateOptions::default(),
        )
        .unwrap();
        // Three blocks, two separators: a separator is the "}," produced by
        // block_close + separator.
        assert_eq!(out.matches("},\n").count(), 2);
        assert!(!out.starts_with(','));
        assert!(out.ends_with("    }\n);"));
    }

    #[test]
    fn test_empty_input_emits_dangling_wrapper() {
        let out = generate(
            &[],
            LOCATION_FIELDS,
            &Template::has_data("Location"),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert_eq!(out, "modelBuilder.Entity<Location>().HasData(\n);");
    }

    #[test]
    fn test_deterministic() {
        let recs = records(json!([{"Id": "L001", "Name": "Da Nang"}]));
        let template = Template::has_data("Location");
        let opts = GenerateOptions::default();
        let a = generate(&recs, LOCATION_FIELDS, &template, &opts).unwrap();
        let b = generate(&recs, LOCATION_FIELDS, &template, &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_field_names_record_position() {
        let recs = records(json!([
            {"Id": "L001", "Name": "Da Nang"},
            {"Id": "L002"},
        ]));
        let err = generate(
            &recs,
            LOCATION_FIELDS,
            &Template::has_data("Location"),
            &GenerateOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, GenerateError::missing_field(1, "Name"));
    }

    #[test]
    fn test_constant_and_renamed_sources() {
        let fields: &[FieldSpec] = &[
            FieldSpec::new("Id", SemanticType::Text),
            FieldSpec::constant("Customer_Id", "CUS001", SemanticType::Text),
            FieldSpec::renamed("Location_Id", "Location_id", SemanticType::Text),
        ];
        let recs = records(json!([{"Id": "R001", "Location_id": "L001"}]));
        let out = generate(
            &recs,
            fields,
            &Template::has_data("Review"),
            &GenerateOptions::default(),
        )
        .unwrap();
        assert!(out.contains("Customer_Id = \"CUS001\""));
        assert!(out.contains("Location_Id = \"L001\""));
    }

    #[test]
    fn test_format_failure_carries_record_and_field() {
        let fields: &[FieldSpec] = &[FieldSpec::new("Create_at", SemanticType::DateTime)];
        let recs = records(json!([
            {"Create_at": "2024-01-01 08:00:00"},
            {"Create_at": "yesterday"},
        ]));
        let err = generate(
            &recs,
            fields,
            &Template::has_data("Review"),
            &GenerateOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GenerateError::DateFormat {
                record: 1,
                field: "Create_at".into(),
                value: "yesterday".into(),
            }
        );
    }

    #[test]
    fn test_renamed_column_errors_report_json_name() {
        let fields: &[FieldSpec] =
            &[FieldSpec::renamed("Location_Id", "Location_id", SemanticType::Text)];
        let template = Template::has_data("Tour");

        // Missing field and format failure both name the JSON field.
        let recs = records(json!([{}]));
        let err = generate(&recs, fields, &template, &GenerateOptions::default()).unwrap_err();
        assert_eq!(err, GenerateError::missing_field(0, "Location_id"));

        let recs = records(json!([{"Location_id": 7}]));
        let err = generate(&recs, fields, &template, &GenerateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            GenerateError::TypeMismatch {
                record: 0,
                field: "Location_id".into(),
                expected: "a string",
            }
        );
    }

    #[test]
    fn test_null_policy_substitutes_instead_of_failing() {
        let fields: &[FieldSpec] = &[FieldSpec::new("Update_at", SemanticType::DateTime)];
        // Both an unparseable string and a JSON null render as `null`.
        let recs = records(json!([{"Update_at": "never"}, {"Update_at": null}]));
        let out = generate(
            &recs,
            fields,
            &Template::has_data("Tour"),
            &GenerateOptions {
                datetime_policy: DateTimePolicy::NullOnError,
            },
        )
        .unwrap();
        assert_eq!(out.matches("Update_at = null").count(), 2);
    }
}
