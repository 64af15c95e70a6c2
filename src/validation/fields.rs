//! Field-level readers for JSON objects

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;
use serde_json::{Map, Value};

use super::{FieldIssue, ValidationErrors};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Reads typed fields out of a JSON object, recording an error for every
/// field that is missing or malformed.
///
/// Each reader returns `None` exactly when it recorded an error, so a
/// schema can build its value once every field came back `Some`.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    /// Start reading a payload; anything but a JSON object is rejected
    pub fn new(payload: &'a Value) -> Result<Self, ValidationErrors> {
        match payload {
            Value::Object(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            _ => {
                let mut errors = ValidationErrors::new();
                errors.push("body", FieldIssue::WrongType { expected: "a JSON object" });
                Err(errors)
            }
        }
    }

    /// Field value, treating JSON `null` as absent
    fn value(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }

    fn reject<T>(&mut self, field: &str, issue: FieldIssue) -> Option<T> {
        self.errors.push(field, issue);
        None
    }

    pub fn string(&mut self, field: &str) -> Option<String> {
        match self.value(field) {
            None => self.reject(field, FieldIssue::Missing),
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => self.reject(field, FieldIssue::WrongType { expected: "a string" }),
        }
    }

    pub fn non_empty_string(&mut self, field: &str) -> Option<String> {
        let text = self.string(field)?;
        if text.trim().is_empty() {
            return self.reject(field, FieldIssue::Empty);
        }
        Some(text)
    }

    pub fn string_with_min_length(&mut self, field: &str, min: usize) -> Option<String> {
        let text = self.string(field)?;
        if text.chars().count() < min {
            return self.reject(field, FieldIssue::TooShort { min });
        }
        Some(text)
    }

    pub fn email(&mut self, field: &str) -> Option<String> {
        let text = self.string(field)?;
        if !is_valid_email(&text) {
            return self.reject(field, FieldIssue::InvalidEmail);
        }
        Some(text)
    }

    /// Optional string; `Some(None)` when absent or null
    pub fn optional_string(&mut self, field: &str) -> Option<Option<String>> {
        match self.value(field) {
            None => Some(None),
            Some(Value::String(text)) => Some(Some(text.clone())),
            Some(_) => self.reject(field, FieldIssue::WrongType { expected: "a string" }),
        }
    }

    pub fn bool_or(&mut self, field: &str, default: bool) -> Option<bool> {
        match self.value(field) {
            None => Some(default),
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => self.reject(field, FieldIssue::WrongType { expected: "a boolean" }),
        }
    }

    pub fn integer(&mut self, field: &str) -> Option<i64> {
        match self.value(field) {
            None => self.reject(field, FieldIssue::Missing),
            Some(value) => match value.as_i64() {
                Some(number) => Some(number),
                None => self.reject(field, FieldIssue::WrongType { expected: "an integer" }),
            },
        }
    }

    /// RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC
    pub fn datetime(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let text = self.string(field)?;
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(&text) {
            return Some(timestamp.with_timezone(&Utc));
        }
        match NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            Some(midnight) => Some(Utc.from_utc_datetime(&midnight)),
            None => self.reject(field, FieldIssue::InvalidDate),
        }
    }

    /// Errors recorded so far
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}
