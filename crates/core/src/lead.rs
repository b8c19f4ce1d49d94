//! The lead entity, its creation payload, and the in-progress draft.
//!
//! A [`Lead`] is write-once: stores produce it from a validated [`NewLead`]
//! and nothing in the public API mutates it afterwards. Optional scalar
//! fields use `None` (JSON `null`) as their single absent representation and
//! tag sets are always arrays.

use serde::{Deserialize, Serialize};

use crate::types::{LeadId, Timestamp};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Every input field of a lead, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    CompanyName,
    Industry,
    CompanySize,
    Position,
    Challenges,
    MainChallenge,
    ImpactLevel,
    InterestedSolutions,
    Motivation,
    FullName,
    Email,
    Phone,
    PreferredTime,
    Budget,
    Urgency,
    Comments,
}

impl LeadField {
    /// All fields in schema order. Validation reports violations in this order.
    pub const ALL: [LeadField; 16] = [
        Self::CompanyName,
        Self::Industry,
        Self::CompanySize,
        Self::Position,
        Self::Challenges,
        Self::MainChallenge,
        Self::ImpactLevel,
        Self::InterestedSolutions,
        Self::Motivation,
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::PreferredTime,
        Self::Budget,
        Self::Urgency,
        Self::Comments,
    ];

    /// Wire (JSON) name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::Industry => "industry",
            Self::CompanySize => "companySize",
            Self::Position => "position",
            Self::Challenges => "challenges",
            Self::MainChallenge => "mainChallenge",
            Self::ImpactLevel => "impactLevel",
            Self::InterestedSolutions => "interestedSolutions",
            Self::Motivation => "motivation",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PreferredTime => "preferredTime",
            Self::Budget => "budget",
            Self::Urgency => "urgency",
            Self::Comments => "comments",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company name",
            Self::Industry => "Industry",
            Self::CompanySize => "Company size",
            Self::Position => "Position",
            Self::Challenges => "Challenges",
            Self::MainChallenge => "Main challenge",
            Self::ImpactLevel => "Impact level",
            Self::InterestedSolutions => "Interested solutions",
            Self::Motivation => "Motivation",
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::PreferredTime => "Preferred time",
            Self::Budget => "Budget",
            Self::Urgency => "Urgency",
            Self::Comments => "Comments",
        }
    }

    /// Whether the field holds a set of tags rather than a single string.
    pub fn is_tag_set(self) -> bool {
        matches!(self, Self::Challenges | Self::InterestedSolutions)
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A persisted lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub position: String,
    pub challenges: Vec<String>,
    pub main_challenge: Option<String>,
    pub impact_level: Option<String>,
    pub interested_solutions: Vec<String>,
    pub motivation: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_time: Option<String>,
    pub budget: Option<String>,
    pub urgency: Option<String>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
}

/// A validated, normalized lead-creation payload.
///
/// Only [`crate::validation`] constructs these from untrusted input; stores
/// turn them into a [`Lead`] by assigning an id and a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub position: String,
    pub challenges: Vec<String>,
    pub main_challenge: Option<String>,
    pub impact_level: Option<String>,
    pub interested_solutions: Vec<String>,
    pub motivation: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_time: Option<String>,
    pub budget: Option<String>,
    pub urgency: Option<String>,
    pub comments: Option<String>,
}

impl NewLead {
    /// Build the stored record. Used by the volatile store, which assigns
    /// ids and timestamps itself.
    pub fn into_lead(self, id: LeadId, created_at: Timestamp) -> Lead {
        Lead {
            id,
            company_name: self.company_name,
            industry: self.industry,
            company_size: self.company_size,
            position: self.position,
            challenges: self.challenges,
            main_challenge: self.main_challenge,
            impact_level: self.impact_level,
            interested_solutions: self.interested_solutions,
            motivation: self.motivation,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            preferred_time: self.preferred_time,
            budget: self.budget,
            urgency: self.urgency,
            comments: self.comments,
            created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// In-progress form data. Every field is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadDraft {
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub position: Option<String>,
    pub challenges: Vec<String>,
    pub main_challenge: Option<String>,
    pub impact_level: Option<String>,
    pub interested_solutions: Vec<String>,
    pub motivation: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_time: Option<String>,
    pub budget: Option<String>,
    pub urgency: Option<String>,
    pub comments: Option<String>,
}

impl LeadDraft {
    /// Trimmed, non-empty value of a scalar field. Always `None` for tag sets.
    pub fn text(&self, field: LeadField) -> Option<&str> {
        self.slot(field)
            .and_then(|v| v.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Set a scalar field. Ignored for tag sets.
    pub fn set_text(&mut self, field: LeadField, value: impl Into<String>) {
        if let Some(slot) = self.slot_mut(field) {
            *slot = Some(value.into());
        }
    }

    /// Tags of a tag-set field. Empty for scalar fields.
    pub fn tags(&self, field: LeadField) -> &[String] {
        match field {
            LeadField::Challenges => &self.challenges,
            LeadField::InterestedSolutions => &self.interested_solutions,
            _ => &[],
        }
    }

    /// Add the tag if absent, remove it if present (checkbox semantics).
    pub fn toggle_tag(&mut self, field: LeadField, tag: &str) {
        let tags = match field {
            LeadField::Challenges => &mut self.challenges,
            LeadField::InterestedSolutions => &mut self.interested_solutions,
            _ => return,
        };
        if let Some(pos) = tags.iter().position(|t| t == tag) {
            tags.remove(pos);
        } else {
            tags.push(tag.to_string());
        }
    }

    /// Produce the normalized payload. Callers validate first; required
    /// fields that are still missing come out as empty strings.
    pub(crate) fn normalize(&self) -> NewLead {
        let required = |field| self.text(field).unwrap_or_default().to_string();
        let optional = |field| self.text(field).map(str::to_string);

        NewLead {
            company_name: required(LeadField::CompanyName),
            industry: required(LeadField::Industry),
            company_size: required(LeadField::CompanySize),
            position: required(LeadField::Position),
            challenges: normalize_tags(&self.challenges),
            main_challenge: optional(LeadField::MainChallenge),
            impact_level: optional(LeadField::ImpactLevel),
            interested_solutions: normalize_tags(&self.interested_solutions),
            motivation: optional(LeadField::Motivation),
            full_name: required(LeadField::FullName),
            email: required(LeadField::Email),
            phone: required(LeadField::Phone),
            preferred_time: optional(LeadField::PreferredTime),
            budget: optional(LeadField::Budget),
            urgency: optional(LeadField::Urgency),
            comments: optional(LeadField::Comments),
        }
    }

    fn slot(&self, field: LeadField) -> Option<&Option<String>> {
        match field {
            LeadField::CompanyName => Some(&self.company_name),
            LeadField::Industry => Some(&self.industry),
            LeadField::CompanySize => Some(&self.company_size),
            LeadField::Position => Some(&self.position),
            LeadField::MainChallenge => Some(&self.main_challenge),
            LeadField::ImpactLevel => Some(&self.impact_level),
            LeadField::Motivation => Some(&self.motivation),
            LeadField::FullName => Some(&self.full_name),
            LeadField::Email => Some(&self.email),
            LeadField::Phone => Some(&self.phone),
            LeadField::PreferredTime => Some(&self.preferred_time),
            LeadField::Budget => Some(&self.budget),
            LeadField::Urgency => Some(&self.urgency),
            LeadField::Comments => Some(&self.comments),
            LeadField::Challenges | LeadField::InterestedSolutions => None,
        }
    }

    fn slot_mut(&mut self, field: LeadField) -> Option<&mut Option<String>> {
        match field {
            LeadField::CompanyName => Some(&mut self.company_name),
            LeadField::Industry => Some(&mut self.industry),
            LeadField::CompanySize => Some(&mut self.company_size),
            LeadField::Position => Some(&mut self.position),
            LeadField::MainChallenge => Some(&mut self.main_challenge),
            LeadField::ImpactLevel => Some(&mut self.impact_level),
            LeadField::Motivation => Some(&mut self.motivation),
            LeadField::FullName => Some(&mut self.full_name),
            LeadField::Email => Some(&mut self.email),
            LeadField::Phone => Some(&mut self.phone),
            LeadField::PreferredTime => Some(&mut self.preferred_time),
            LeadField::Budget => Some(&mut self.budget),
            LeadField::Urgency => Some(&mut self.urgency),
            LeadField::Comments => Some(&mut self.comments),
            LeadField::Challenges | LeadField::InterestedSolutions => None,
        }
    }
}

/// Trim tags, drop blanks and duplicates, keep first-seen order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !out.iter().any(|existing| existing == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_wire_names_match_serde() {
        for field in LeadField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.as_str());
        }
    }

    #[test]
    fn text_trims_and_hides_blank_values() {
        let mut draft = LeadDraft::default();
        draft.set_text(LeadField::CompanyName, "  Acme  ");
        draft.set_text(LeadField::Motivation, "   ");

        assert_eq!(draft.text(LeadField::CompanyName), Some("Acme"));
        assert_eq!(draft.text(LeadField::Motivation), None);
        assert_eq!(draft.text(LeadField::Challenges), None);
    }

    #[test]
    fn toggle_tag_adds_then_removes() {
        let mut draft = LeadDraft::default();
        draft.toggle_tag(LeadField::Challenges, "dados");
        draft.toggle_tag(LeadField::Challenges, "custos");
        assert_eq!(draft.tags(LeadField::Challenges), ["dados", "custos"]);

        draft.toggle_tag(LeadField::Challenges, "dados");
        assert_eq!(draft.tags(LeadField::Challenges), ["custos"]);
    }

    #[test]
    fn toggle_tag_on_scalar_field_is_ignored() {
        let mut draft = LeadDraft::default();
        draft.toggle_tag(LeadField::Email, "x");
        assert_eq!(draft, LeadDraft::default());
    }

    #[test]
    fn normalize_tags_dedups_and_drops_blanks() {
        let tags = vec![
            " atendimento ".to_string(),
            "".to_string(),
            "dados".to_string(),
            "atendimento".to_string(),
        ];
        assert_eq!(normalize_tags(&tags), ["atendimento", "dados"]);
    }

    #[test]
    fn normalize_maps_blank_optionals_to_none() {
        let mut draft = LeadDraft::default();
        draft.set_text(LeadField::Budget, "");
        draft.set_text(LeadField::Urgency, "imediata");

        let lead = draft.normalize();
        assert_eq!(lead.budget, None);
        assert_eq!(lead.urgency.as_deref(), Some("imediata"));
        assert!(lead.interested_solutions.is_empty());
    }
}
