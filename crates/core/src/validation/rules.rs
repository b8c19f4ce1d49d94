//! Violation types and rule constants for the lead schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lead::LeadField;

/// Minimum length (in characters) of `companyName` and `fullName`.
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum number of digit characters in `phone`.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Absent, blank, or (for `challenges`) empty.
    MissingRequired,
    /// Present but malformed: bad email shape or wrong JSON type.
    InvalidFormat,
    /// Present but below a minimum length or digit count.
    TooShort,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: LeadField,
    pub kind: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: LeadField, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn missing(field: LeadField) -> Self {
        let message = match field {
            LeadField::Challenges => "Select at least one challenge".to_string(),
            other => format!("{} is required", other.label()),
        };
        Self::new(field, ViolationKind::MissingRequired, message)
    }
}

/// Every violation found in one payload, in schema field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The violation reported for `field`, if any.
    pub fn for_field(&self, field: LeadField) -> Option<&FieldViolation> {
        self.0.iter().find(|v| v.field == field)
    }

    /// Fields that failed, in report order.
    pub fn fields(&self) -> Vec<LeadField> {
        self.0.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|v| v.field.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
