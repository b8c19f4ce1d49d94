//! Schema evaluator: pure logic, no I/O.

use serde_json::{Map, Value};
use validator::ValidateEmail;

use super::rules::{
    FieldViolation, ValidationErrors, ViolationKind, MIN_NAME_LENGTH, MIN_PHONE_DIGITS,
};
use crate::lead::{normalize_tags, LeadDraft, LeadField, NewLead};

/// Validate an untrusted JSON body into a normalized creation payload.
///
/// Unknown keys are ignored and `null` counts as absent. A known key holding
/// the wrong JSON type is reported as [`ViolationKind::InvalidFormat`]. A
/// body that is not an object is treated as an empty one.
pub fn validate_insert_payload(raw: &Value) -> Result<NewLead, ValidationErrors> {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);
    let (draft, type_violations) = draft_from_json(obj);
    check(&draft, type_violations)
}

/// Validate a typed draft into a normalized creation payload.
pub fn validate_draft(draft: &LeadDraft) -> Result<NewLead, ValidationErrors> {
    check(draft, Vec::new())
}

fn check(
    draft: &LeadDraft,
    mut type_violations: Vec<FieldViolation>,
) -> Result<NewLead, ValidationErrors> {
    let mut violations = Vec::new();

    for field in LeadField::ALL {
        // A type violation already says everything about the field.
        if let Some(pos) = type_violations.iter().position(|v| v.field == field) {
            violations.push(type_violations.swap_remove(pos));
            continue;
        }
        if let Some(violation) = evaluate_field(field, draft) {
            violations.push(violation);
        }
    }

    if violations.is_empty() {
        Ok(draft.normalize())
    } else {
        Err(ValidationErrors::new(violations))
    }
}

fn evaluate_field(field: LeadField, draft: &LeadDraft) -> Option<FieldViolation> {
    match field {
        LeadField::CompanyName | LeadField::FullName => {
            evaluate_min_length(field, draft.text(field), MIN_NAME_LENGTH)
        }
        LeadField::Industry | LeadField::CompanySize | LeadField::Position => {
            evaluate_required(field, draft.text(field))
        }
        LeadField::Challenges => {
            if normalize_tags(&draft.challenges).is_empty() {
                Some(FieldViolation::missing(field))
            } else {
                None
            }
        }
        LeadField::Email => evaluate_email(draft.text(field)),
        LeadField::Phone => evaluate_phone(draft.text(field)),
        LeadField::MainChallenge
        | LeadField::ImpactLevel
        | LeadField::InterestedSolutions
        | LeadField::Motivation
        | LeadField::PreferredTime
        | LeadField::Budget
        | LeadField::Urgency
        | LeadField::Comments => None,
    }
}

fn evaluate_required(field: LeadField, value: Option<&str>) -> Option<FieldViolation> {
    match value {
        None => Some(FieldViolation::missing(field)),
        Some(_) => None,
    }
}

fn evaluate_min_length(field: LeadField, value: Option<&str>, min: usize) -> Option<FieldViolation> {
    let value = match value {
        None => return Some(FieldViolation::missing(field)),
        Some(v) => v,
    };
    if value.chars().count() < min {
        return Some(FieldViolation::new(
            field,
            ViolationKind::TooShort,
            format!("{} must have at least {min} characters", field.label()),
        ));
    }
    None
}

fn evaluate_email(value: Option<&str>) -> Option<FieldViolation> {
    let value = match value {
        None => return Some(FieldViolation::missing(LeadField::Email)),
        Some(v) => v,
    };
    if !value.validate_email() {
        return Some(FieldViolation::new(
            LeadField::Email,
            ViolationKind::InvalidFormat,
            "Invalid email",
        ));
    }
    None
}

fn evaluate_phone(value: Option<&str>) -> Option<FieldViolation> {
    let value = match value {
        None => return Some(FieldViolation::missing(LeadField::Phone)),
        Some(v) => v,
    };
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Some(FieldViolation::new(
            LeadField::Phone,
            ViolationKind::TooShort,
            format!("Phone must have at least {MIN_PHONE_DIGITS} digits"),
        ));
    }
    None
}

// ---------------------------------------------------------------------------
// JSON extraction
// ---------------------------------------------------------------------------

fn draft_from_json(obj: &Map<String, Value>) -> (LeadDraft, Vec<FieldViolation>) {
    let mut draft = LeadDraft::default();
    let mut violations = Vec::new();

    for field in LeadField::ALL {
        let value = match obj.get(field.as_str()) {
            None | Some(Value::Null) => continue,
            Some(v) => v,
        };

        if field.is_tag_set() {
            match tags_from_json(value) {
                Some(tags) if field == LeadField::Challenges => draft.challenges = tags,
                Some(tags) => draft.interested_solutions = tags,
                None => violations.push(FieldViolation::new(
                    field,
                    ViolationKind::InvalidFormat,
                    format!("{} must be a list of strings", field.label()),
                )),
            }
        } else {
            match value.as_str() {
                Some(s) => draft.set_text(field, s),
                None => violations.push(FieldViolation::new(
                    field,
                    ViolationKind::InvalidFormat,
                    format!("{} must be a string", field.label()),
                )),
            }
        }
    }

    (draft, violations)
}

fn tags_from_json(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|tag| tag.as_str().map(str::to_string))
        .collect()
}
