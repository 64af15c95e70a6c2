//! Payload validation
//!
//! Turns untyped JSON request bodies into the typed insertable models,
//! collecting every field problem instead of stopping at the first one.

pub mod fields;
pub mod schemas;

use serde_json::Value;

use crate::utils::errors::{GamesConnectError, PayloadKind, Result};

pub use fields::{is_valid_email, FieldReader};

/// What is wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    WrongType { expected: &'static str },
    Empty,
    TooShort { min: usize },
    InvalidEmail,
    InvalidDate,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldIssue::Missing => write!(f, "is required"),
            FieldIssue::WrongType { expected } => write!(f, "must be {}", expected),
            FieldIssue::Empty => write!(f, "must not be empty"),
            FieldIssue::TooShort { min } => write!(f, "must be at least {} characters", min),
            FieldIssue::InvalidEmail => write!(f, "must be a valid email address"),
            FieldIssue::InvalidDate => write!(f, "must be an RFC 3339 timestamp or a YYYY-MM-DD date"),
        }
    }
}

/// A validation failure attached to a named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub issue: FieldIssue,
}

impl FieldError {
    pub fn new(field: impl Into<String>, issue: FieldIssue) -> Self {
        Self {
            field: field.into(),
            issue,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.issue)
    }
}

/// All field errors found in one payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, issue: FieldIssue) {
        self.errors.push(FieldError::new(field, issue));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Issue recorded for a field, if any
    pub fn issue_for(&self, field: &str) -> Option<&FieldIssue> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| &error.issue)
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// A model that clients may create, built from an untyped payload.
///
/// Server-assigned fields (identifier, creation timestamp) are never read
/// from the payload.
pub trait Insertable: Sized {
    /// Payload kind reported when validation fails
    const KIND: PayloadKind;

    /// Validate the payload field by field
    fn from_payload(payload: &Value) -> std::result::Result<Self, ValidationErrors>;

    /// Validate the payload, wrapping failures into the application error
    fn parse(payload: &Value) -> Result<Self> {
        Self::from_payload(payload).map_err(|errors| GamesConnectError::invalid_input(Self::KIND, errors))
    }
}
