// crates/core/src/format.rs
//! Pure per-field formatters: one semantic type in, one code literal out.
//!
//! Every function here is stateless and deterministic. Failures carry no
//! record position; the generator attaches that context.

use crate::error::FieldError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value;

/// Format string for calendar-date fields (`2024-03-07`).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format string for date-and-time fields (`2024-03-07 14:05:00`).
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The logical kind of a field's value, independent of its JSON source
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Quoted string literal: `"Beach break"`.
    Text,
    /// Verbatim string literal for multi-line text: `@"Day 1: ..."`.
    VerbatimText,
    /// Whole number, emitted unquoted.
    Integer,
    /// Currency amount, emitted with the decimal-literal suffix: `99.5m`.
    Decimal,
    /// Fractional ratio emitted as a truncated whole percentage: 0.15 → 15.
    Percent,
    /// Calendar date decomposed into a `new DateOnly(y, m, d)` literal.
    Date,
    /// Date-and-time decomposed into a `new DateTime(y, m, d, h, mi, s)` literal.
    DateTime,
    /// Emitted verbatim, unquoted: booleans, enum-like status numbers,
    /// raw identifier references.
    Raw,
}

/// What to do when a [`SemanticType::DateTime`] value fails to parse.
///
/// The legacy tour generator substituted `null` on bad timestamps while
/// every other generator treated them as fatal; both behaviors are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateTimePolicy {
    /// A malformed timestamp fails the whole run.
    #[default]
    Strict,
    /// A malformed timestamp renders as the literal `null`.
    NullOnError,
}

/// Render one scalar value as a code literal according to its semantic type.
pub fn format_value(
    kind: SemanticType,
    value: &Value,
    policy: DateTimePolicy,
) -> Result<String, FieldError> {
    match kind {
        SemanticType::Text => Ok(quoted(expect_str(value)?)),
        SemanticType::VerbatimText => Ok(verbatim(expect_str(value)?)),
        SemanticType::Integer => integer_literal(value),
        SemanticType::Decimal => decimal_literal(value),
        SemanticType::Percent => percent_literal(value),
        SemanticType::Date => date_literal(expect_str(value)?),
        // Under the lenient policy a non-string timestamp (the tour
        // fixture carries JSON null) substitutes like any parse failure.
        SemanticType::DateTime => match value.as_str() {
            Some(text) => datetime_literal(text, policy),
            None => match policy {
                DateTimePolicy::Strict => Err(FieldError::TypeMismatch { expected: "a string" }),
                DateTimePolicy::NullOnError => Ok("null".to_string()),
            },
        },
        SemanticType::Raw => raw_literal(value),
    }
}

/// Double every embedded quote so the text stays valid inside a
/// verbatim-style string literal: `He said "hi"` → `He said ""hi""`.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", escape_quotes(text))
}

fn verbatim(text: &str) -> String {
    format!("@\"{}\"", escape_quotes(text))
}

fn integer_literal(value: &Value) -> Result<String, FieldError> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(FieldError::TypeMismatch {
            expected: "a whole number",
        }),
    }
}

fn decimal_literal(value: &Value) -> Result<String, FieldError> {
    match value {
        Value::Number(n) => Ok(format!("{n}m")),
        _ => Err(FieldError::TypeMismatch { expected: "a number" }),
    }
}

/// Scale a fractional ratio to a whole percentage, truncating toward zero.
/// Documented lossy conversion: 0.155 → 15, never 16.
fn percent_literal(value: &Value) -> Result<String, FieldError> {
    let ratio = value
        .as_f64()
        .ok_or(FieldError::TypeMismatch { expected: "a number" })?;
    Ok(((ratio * 100.0).trunc() as i64).to_string())
}

fn date_literal(text: &str) -> Result<String, FieldError> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| FieldError::DateFormat {
        value: text.to_string(),
    })?;
    Ok(format!(
        "new DateOnly({}, {}, {})",
        date.year(),
        date.month(),
        date.day()
    ))
}

fn datetime_literal(text: &str, policy: DateTimePolicy) -> Result<String, FieldError> {
    match NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        Ok(dt) => Ok(format!(
            "new DateTime({}, {}, {}, {}, {}, {})",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )),
        Err(_) => match policy {
            DateTimePolicy::Strict => Err(FieldError::DateFormat {
                value: text.to_string(),
            }),
            DateTimePolicy::NullOnError => Ok("null".to_string()),
        },
    }
}

fn raw_literal(value: &Value) -> Result<String, FieldError> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(FieldError::TypeMismatch {
            expected: "a number, boolean, or identifier",
        }),
    }
}

fn expect_str(value: &Value) -> Result<&str, FieldError> {
    value
        .as_str()
        .ok_or(FieldError::TypeMismatch { expected: "a string" })
}
