//! Field lookup and coercion

use super::types::{Field, ValidationError, ValidationErrorKind};
use crate::decode::Record;
use chrono::NaiveDateTime;

/// Timestamp layout used by every XMLAgent date field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Typed read access to one record on behalf of one entity
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    record: &'a Record,
    entity: &'static str,
}

impl<'a> FieldReader<'a> {
    /// Read `record` for the entity named `entity`
    pub fn new(record: &'a Record, entity: &'static str) -> Self {
        Self { record, entity }
    }

    /// The underlying record
    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// Raw value of the first candidate name that holds a value
    pub fn lookup(&self, field: &Field) -> Option<&'a str> {
        field.candidates().find_map(|name| self.record.get(name))
    }

    /// Text field defaulting to `""`
    pub fn text(&self, field: &Field) -> String {
        self.lookup(field).unwrap_or_default().to_string()
    }

    /// Text field that may be absent
    pub fn optional_text(&self, field: &Field) -> Option<String> {
        self.lookup(field).map(str::to_string)
    }

    /// Text field that must be present
    pub fn required_text(&self, field: &Field) -> Result<String, ValidationError> {
        self.lookup(field)
            .map(str::to_string)
            .ok_or_else(|| self.error(field, ValidationErrorKind::Missing))
    }

    /// Integer field; missing or empty takes `default`
    pub fn integer(&self, field: &Field, default: i64) -> Result<i64, ValidationError> {
        Ok(self.optional_integer(field)?.unwrap_or(default))
    }

    /// Integer field; missing or empty is `None`
    pub fn optional_integer(&self, field: &Field) -> Result<Option<i64>, ValidationError> {
        let Some(value) = self.non_empty(field) else {
            return Ok(None);
        };

        value.trim().parse::<i64>().map(Some).map_err(|_| {
            self.error(
                field,
                ValidationErrorKind::InvalidInteger {
                    value: value.to_string(),
                },
            )
        })
    }

    /// Decimal field; missing or empty takes `default`
    pub fn number(&self, field: &Field, default: f64) -> Result<f64, ValidationError> {
        let Some(value) = self.non_empty(field) else {
            return Ok(default);
        };

        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(self.error(
                field,
                ValidationErrorKind::InvalidNumber {
                    value: value.to_string(),
                },
            )),
        }
    }

    /// Boolean flag; missing or empty is `None`
    pub fn optional_flag(&self, field: &Field) -> Result<Option<bool>, ValidationError> {
        let Some(value) = self.non_empty(field) else {
            return Ok(None);
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
            "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
            _ => Err(self.error(
                field,
                ValidationErrorKind::InvalidFlag {
                    value: value.to_string(),
                },
            )),
        }
    }

    /// Required `YYYY-MM-DD HH:MM:SS` timestamp
    pub fn timestamp(&self, field: &Field) -> Result<NaiveDateTime, ValidationError> {
        let value = self
            .lookup(field)
            .ok_or_else(|| self.error(field, ValidationErrorKind::Missing))?;

        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
            self.error(
                field,
                ValidationErrorKind::InvalidTimestamp {
                    value: value.to_string(),
                },
            )
        })
    }

    fn non_empty(&self, field: &Field) -> Option<&'a str> {
        self.lookup(field).filter(|v| !v.trim().is_empty())
    }

    fn error(&self, field: &Field, kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            entity: self.entity,
            field: field.name,
            kind,
            record: self.record.clone(),
        }
    }
}
