use thiserror::Error;

use super::error::SubmissionError;
use crate::domain::a001_contact_message::{ContactFormData, CreateContactMessageRequest, FormField};

/// How long the confirmation stays on screen after a successful submission
pub const SUCCESS_DISPLAY_MS: u64 = 8_000;

/// Identifies one success display, so a stale timer cannot end a newer one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuccessTicket(pub u64);

/// Where the form currently is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        pending: ContactFormData,
    },
    Success {
        last_submitted: ContactFormData,
        ticket: SuccessTicket,
        shown_at_ms: u64,
    },
    Error(String),
}

/// Why `begin_submit` refused to start a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("required fields are empty: {0:?}")]
    MissingFields(Vec<FormField>),
}

/// Form values plus submission state of the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormMachine {
    form: ContactFormData,
    state: SubmissionState,
    next_ticket: u64,
}

impl ContactFormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactFormData {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Data of the submission whose confirmation is showing
    pub fn last_submitted(&self) -> Option<&ContactFormData> {
        match &self.state {
            SubmissionState::Success { last_submitted, .. } => Some(last_submitted),
            _ => None,
        }
    }

    /// Write one field; an error on display is dismissed
    pub fn update_field(&mut self, field: FormField, value: String) {
        self.form.set_field(field, value);
        if matches!(self.state, SubmissionState::Error(_)) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validate and move to `Submitting`, returning the body to send.
    ///
    /// Nothing changes while a request is already in flight. A validation
    /// failure leaves the form in `Error` with the fixed message.
    pub fn begin_submit(&mut self) -> Result<CreateContactMessageRequest, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }

        let missing = self.form.missing_required();
        if !missing.is_empty() {
            log::debug!("contact form incomplete: {:?}", missing);
            self.state = SubmissionState::Error(SubmissionError::Validation.user_message());
            return Err(SubmitRejected::MissingFields(missing));
        }

        let request = CreateContactMessageRequest::from(&self.form);
        self.state = SubmissionState::Submitting {
            pending: self.form.clone(),
        };
        Ok(request)
    }

    /// Apply the outcome of the request started by `begin_submit`.
    ///
    /// Returns the ticket of the new success display, to be handed back to
    /// `expire_success` once `SUCCESS_DISPLAY_MS` has elapsed.
    pub fn complete(
        &mut self,
        outcome: Result<(), SubmissionError>,
        now_ms: u64,
    ) -> Option<SuccessTicket> {
        let pending = match std::mem::take(&mut self.state) {
            SubmissionState::Submitting { pending } => pending,
            other => {
                log::warn!("submission outcome arrived outside of Submitting, ignored");
                self.state = other;
                return None;
            }
        };

        match outcome {
            Ok(()) => {
                self.next_ticket += 1;
                let ticket = SuccessTicket(self.next_ticket);
                self.form = ContactFormData::default();
                self.state = SubmissionState::Success {
                    last_submitted: pending,
                    ticket,
                    shown_at_ms: now_ms,
                };
                Some(ticket)
            }
            Err(err) => {
                log::warn!("contact message not sent: {}", err);
                self.state = SubmissionState::Error(err.user_message());
                None
            }
        }
    }

    /// Time left before `ticket` may expire, while it is still the one showing
    pub fn success_remaining_ms(&self, ticket: SuccessTicket, now_ms: u64) -> Option<u64> {
        match &self.state {
            SubmissionState::Success {
                ticket: current,
                shown_at_ms,
                ..
            } if *current == ticket => {
                Some(SUCCESS_DISPLAY_MS.saturating_sub(now_ms.saturating_sub(*shown_at_ms)))
            }
            _ => None,
        }
    }

    /// Leave `Success` if `ticket` is still the one showing and its time is up
    pub fn expire_success(&mut self, ticket: SuccessTicket, now_ms: u64) -> bool {
        let due = matches!(
            &self.state,
            SubmissionState::Success { ticket: current, shown_at_ms, .. }
                if *current == ticket
                    && now_ms.saturating_sub(*shown_at_ms) >= SUCCESS_DISPLAY_MS
        );
        if due {
            self.state = SubmissionState::Idle;
        }
        due
    }
}
