//! Fixed choice lists offered by the lead form.
//!
//! The schema does not restrict these fields to the listed values; the lists
//! only drive what the form presents.

use serde::Serialize;

use crate::lead::LeadField;

/// One selectable choice: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

pub const INDUSTRIES: &[FieldOption] = &[
    opt("tecnologia", "Technology"),
    opt("direito", "Legal"),
    opt("saude", "Healthcare"),
    opt("educacao", "Education"),
    opt("financeiro", "Finance"),
    opt("varejo", "Retail / E-commerce"),
    opt("servicos", "Services"),
    opt("industrial", "Industrial"),
    opt("imobiliario", "Real estate"),
    opt("outros", "Other"),
];

pub const COMPANY_SIZES: &[FieldOption] = &[
    opt("micro", "Micro (up to 9 employees)"),
    opt("pequena", "Small (10-49 employees)"),
    opt("media", "Medium (50-249 employees)"),
    opt("grande", "Large (250+ employees)"),
];

pub const CHALLENGES: &[FieldOption] = &[
    opt("atendimento", "Customer service"),
    opt("processos", "Manual processes"),
    opt("dados", "Data analysis"),
    opt("custos", "Cost control"),
    opt("comunicacao", "Internal communication"),
    opt("escalabilidade", "Scalability"),
];

pub const IMPACT_LEVELS: &[FieldOption] = &[
    opt("baixo", "Low"),
    opt("medio", "Medium"),
    opt("alto", "High"),
    opt("critico", "Critical"),
];

pub const SOLUTIONS: &[FieldOption] = &[
    opt("chatbot-advanced", "Advanced chatbots with RAG"),
    opt("audio-ai", "AI with audio replies"),
    opt("data-analysis", "AI data analysis"),
    opt("automation", "Process automation"),
];

pub const PREFERRED_TIMES: &[FieldOption] = &[
    opt("manha", "Morning (8h-12h)"),
    opt("tarde", "Afternoon (12h-18h)"),
    opt("noite", "Evening (18h-22h)"),
    opt("flexivel", "Flexible"),
];

pub const BUDGETS: &[FieldOption] = &[
    opt("1k5-4k", "R$ 1,500 to R$ 4,000"),
    opt("5k-15k", "R$ 5,000 to R$ 15,000"),
    opt("15k-30k", "R$ 15,000 to R$ 30,000"),
    opt("30k-mais", "Above R$ 30,000"),
    opt("sem-limite", "No set limit"),
];

pub const URGENCIES: &[FieldOption] = &[
    opt("imediata", "Immediate (within 1 month)"),
    opt("curto-prazo", "Short term (1-3 months)"),
    opt("medio-prazo", "Medium term (3-6 months)"),
    opt("exploratorio", "Exploratory"),
];

/// Choices for `field`, or an empty slice for free-text fields.
pub fn options(field: LeadField) -> &'static [FieldOption] {
    match field {
        LeadField::Industry => INDUSTRIES,
        LeadField::CompanySize => COMPANY_SIZES,
        LeadField::Challenges => CHALLENGES,
        LeadField::ImpactLevel => IMPACT_LEVELS,
        LeadField::InterestedSolutions => SOLUTIONS,
        LeadField::PreferredTime => PREFERRED_TIMES,
        LeadField::Budget => BUDGETS,
        LeadField::Urgency => URGENCIES,
        _ => &[],
    }
}

/// Display label for a stored value, if it is one of the listed choices.
pub fn label_for(field: LeadField, value: &str) -> Option<&'static str> {
    options(field)
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
}
