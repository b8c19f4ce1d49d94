//! Lead form wizard.
//!
//! A four-step form modelled as an explicit state machine. [`transition`] is
//! pure: it takes the current [`WizardState`] and a [`WizardEvent`] and
//! returns the next state plus at most one [`Effect`] for the caller to run.
//! The only effect is the create-lead call, executed by
//! [`session::WizardSession`].
//!
//! Step gating uses the lead schema as its only source of truth: the
//! violations reported by [`validate_draft`] are filtered down to the fields
//! the current step owns.

pub mod session;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, FieldOption};
use crate::lead::{Lead, LeadDraft, LeadField, NewLead};
use crate::validation::{validate_draft, FieldViolation};

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// The four form sections, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Company,
    Challenges,
    Solutions,
    Contact,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        Self::Company,
        Self::Challenges,
        Self::Solutions,
        Self::Contact,
    ];

    /// Convert a 1-based step number.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Company),
            2 => Some(Self::Challenges),
            3 => Some(Self::Solutions),
            4 => Some(Self::Contact),
            _ => None,
        }
    }

    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::Company => 1,
            Self::Challenges => 2,
            Self::Solutions => 3,
            Self::Contact => 4,
        }
    }

    /// Label shown in the progress bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Challenges => "Challenges",
            Self::Solutions => "Solutions",
            Self::Contact => "Contact",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Fields collected on this step.
    pub fn fields(self) -> &'static [LeadField] {
        match self {
            Self::Company => &[
                LeadField::CompanyName,
                LeadField::Industry,
                LeadField::CompanySize,
                LeadField::Position,
            ],
            Self::Challenges => &[
                LeadField::Challenges,
                LeadField::MainChallenge,
                LeadField::ImpactLevel,
            ],
            Self::Solutions => &[LeadField::InterestedSolutions, LeadField::Motivation],
            Self::Contact => &[
                LeadField::FullName,
                LeadField::Email,
                LeadField::Phone,
                LeadField::PreferredTime,
                LeadField::Budget,
                LeadField::Urgency,
                LeadField::Comments,
            ],
        }
    }

    pub fn owns(self, field: LeadField) -> bool {
        self.fields().contains(&field)
    }

    /// Fields on this step that offer a fixed list of choices.
    pub fn choices(self) -> impl Iterator<Item = (LeadField, &'static [FieldOption])> {
        self.fields()
            .iter()
            .map(|&field| (field, catalog::options(field)))
            .filter(|(_, options)| !options.is_empty())
    }
}

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase", content = "step")]
pub enum WizardPhase {
    Editing(WizardStep),
    Submitting,
    Submitted,
}

// ---------------------------------------------------------------------------
// Notices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, dismissable message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.to_string(),
            description: description.into(),
        }
    }

    fn success(title: &str, description: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

const REQUIRED_FIELDS_TITLE: &str = "Required fields";
const REQUIRED_FIELDS_DESCRIPTION: &str = "Please fill in all required fields.";
const SUBMIT_FAILED_TITLE: &str = "Could not submit the form";
const SUBMIT_FAILED_FALLBACK: &str = "Please try again later.";
const SUBMITTED_TITLE: &str = "Form submitted successfully!";
const SUBMITTED_DESCRIPTION: &str = "Our team will contact you soon.";

// ---------------------------------------------------------------------------
// Events and effects
// ---------------------------------------------------------------------------

/// A change to a single draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Replace a scalar field's value.
    Set(LeadField, String),
    /// Check or uncheck a tag in a tag-set field.
    Toggle(LeadField, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Edit(FieldEdit),
    Next,
    Previous,
    Submit,
    SubmissionSucceeded(Lead),
    SubmissionFailed(String),
    DismissNotice,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the create-lead API once with this payload.
    CreateLead(NewLead),
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Complete state of one form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    phase: WizardPhase,
    draft: LeadDraft,
    show_errors: bool,
    notice: Option<Notice>,
    lead: Option<Lead>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// A fresh session on step 1 with an empty draft.
    pub fn new() -> Self {
        Self {
            phase: WizardPhase::Editing(WizardStep::Company),
            draft: LeadDraft::default(),
            show_errors: false,
            notice: None,
            lead: None,
        }
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// The step being edited, or `None` while submitting or once submitted.
    pub fn step(&self) -> Option<WizardStep> {
        match self.phase {
            WizardPhase::Editing(step) => Some(step),
            WizardPhase::Submitting | WizardPhase::Submitted => None,
        }
    }

    /// 1-based step index for display. Submission happens on the last step.
    pub fn step_number(&self) -> u8 {
        self.step().map_or(TOTAL_STEPS, WizardStep::number)
    }

    /// Progress bar fill, `step / total * 100`.
    pub fn progress_percent(&self) -> u8 {
        let percent = u16::from(self.step_number()) * 100 / u16::from(TOTAL_STEPS);
        u8::try_from(percent).unwrap_or(100)
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn show_errors(&self) -> bool {
        self.show_errors
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The stored lead returned by the API once submitted.
    pub fn submitted_lead(&self) -> Option<&Lead> {
        self.lead.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == WizardPhase::Editing(WizardStep::Contact)
    }

    /// Field errors to render for the current step. Empty until a `next` or
    /// `submit` attempt has failed.
    pub fn visible_errors(&self) -> Vec<FieldViolation> {
        match (self.show_errors, self.step()) {
            (true, Some(step)) => step_violations(&self.draft, step),
            _ => Vec::new(),
        }
    }

    fn advance(&mut self, step: WizardStep) {
        let Some(next) = step.next() else {
            return;
        };
        if step_violations(&self.draft, step).is_empty() {
            self.phase = WizardPhase::Editing(next);
            self.show_errors = false;
        } else {
            self.show_errors = true;
            self.notice = Some(Notice::error(
                REQUIRED_FIELDS_TITLE,
                REQUIRED_FIELDS_DESCRIPTION,
            ));
        }
    }

    fn begin_submit(&mut self) -> Option<Effect> {
        match validate_draft(&self.draft) {
            Ok(payload) => {
                self.phase = WizardPhase::Submitting;
                self.notice = None;
                Some(Effect::CreateLead(payload))
            }
            Err(errors) => {
                self.show_errors = true;
                let labels: Vec<&str> = errors.fields().into_iter().map(LeadField::label).collect();
                self.notice = Some(Notice::error(
                    REQUIRED_FIELDS_TITLE,
                    format!("{REQUIRED_FIELDS_DESCRIPTION} Check: {}.", labels.join(", ")),
                ));
                None
            }
        }
    }
}

/// Schema violations belonging to the fields `step` owns.
fn step_violations(draft: &LeadDraft, step: WizardStep) -> Vec<FieldViolation> {
    match validate_draft(draft) {
        Ok(_) => Vec::new(),
        Err(errors) => errors
            .into_violations()
            .into_iter()
            .filter(|v| step.owns(v.field))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Transition function
// ---------------------------------------------------------------------------

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WizardState,
    pub effect: Option<Effect>,
}

/// Apply `event` to `state`. Events that make no sense in the current phase
/// leave the state unchanged.
pub fn transition(mut state: WizardState, event: WizardEvent) -> Transition {
    let effect = match (state.phase, event) {
        (WizardPhase::Editing(_), WizardEvent::Edit(edit)) => {
            match edit {
                FieldEdit::Set(field, value) => state.draft.set_text(field, value),
                FieldEdit::Toggle(field, tag) => state.draft.toggle_tag(field, &tag),
            }
            None
        }
        (WizardPhase::Editing(step), WizardEvent::Next) => {
            state.advance(step);
            None
        }
        (WizardPhase::Editing(step), WizardEvent::Previous) => {
            if let Some(previous) = step.previous() {
                state.phase = WizardPhase::Editing(previous);
            }
            None
        }
        (WizardPhase::Editing(WizardStep::Contact), WizardEvent::Submit) => state.begin_submit(),
        (WizardPhase::Submitting, WizardEvent::SubmissionSucceeded(lead)) => {
            state.phase = WizardPhase::Submitted;
            state.draft = LeadDraft::default();
            state.show_errors = false;
            state.lead = Some(lead);
            state.notice = Some(Notice::success(SUBMITTED_TITLE, SUBMITTED_DESCRIPTION));
            None
        }
        (WizardPhase::Submitting, WizardEvent::SubmissionFailed(reason)) => {
            state.phase = WizardPhase::Editing(WizardStep::Contact);
            let description = if reason.trim().is_empty() {
                SUBMIT_FAILED_FALLBACK.to_string()
            } else {
                reason
            };
            state.notice = Some(Notice::error(SUBMIT_FAILED_TITLE, description));
            None
        }
        (_, WizardEvent::DismissNotice) => {
            state.notice = None;
            None
        }
        _ => None,
    };

    Transition { state, effect }
}
