//! Async boundary of the wizard: runs the create-lead effect.

use std::fmt::Display;

use async_trait::async_trait;

use super::{transition, Effect, FieldEdit, WizardEvent, WizardState};
use crate::lead::{Lead, LeadField, NewLead};

/// Something that can persist a validated lead, usually the HTTP API.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    type Error: Display + Send;

    async fn create_lead(&self, lead: &NewLead) -> Result<Lead, Self::Error>;
}

/// One form session bound to a submitter.
///
/// `submit` takes `&mut self`, so a session can never have two create-lead
/// calls in flight.
pub struct WizardSession<S> {
    state: WizardState,
    submitter: S,
}

impl<S: LeadSubmitter> WizardSession<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            state: WizardState::new(),
            submitter,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        self.apply(WizardEvent::Edit(FieldEdit::Set(field, value.into())));
    }

    pub fn toggle(&mut self, field: LeadField, tag: impl Into<String>) {
        self.apply(WizardEvent::Edit(FieldEdit::Toggle(field, tag.into())));
    }

    pub fn next(&mut self) {
        self.apply(WizardEvent::Next);
    }

    pub fn previous(&mut self) {
        self.apply(WizardEvent::Previous);
    }

    pub fn dismiss_notice(&mut self) {
        self.apply(WizardEvent::DismissNotice);
    }

    /// Validate the whole draft and, if it passes, call the submitter once.
    ///
    /// The outcome is folded back into the state: success ends the session,
    /// failure returns to the contact step with the draft untouched.
    pub async fn submit(&mut self) -> &WizardState {
        let Some(Effect::CreateLead(payload)) = self.apply(WizardEvent::Submit) else {
            return &self.state;
        };

        let outcome = match self.submitter.create_lead(&payload).await {
            Ok(lead) => WizardEvent::SubmissionSucceeded(lead),
            Err(err) => WizardEvent::SubmissionFailed(err.to_string()),
        };
        self.apply(outcome);

        &self.state
    }

    fn apply(&mut self, event: WizardEvent) -> Option<Effect> {
        let current = std::mem::take(&mut self.state);
        let result = transition(current, event);
        self.state = result.state;
        result.effect
    }
}
