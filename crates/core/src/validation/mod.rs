//! Lead schema validation.
//!
//! Pure logic shared by the wizard (pre-check) and the API (authoritative
//! check). Validation is total: every field is evaluated and all violations
//! come back together.

pub mod evaluator;
pub mod rules;

pub use evaluator::{validate_draft, validate_insert_payload};
pub use rules::{FieldViolation, ValidationErrors, ViolationKind};
