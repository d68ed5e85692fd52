//! Contact form editing state
//!
//! Wraps `folio_core::ContactForm` with focus, submission status and the
//! copy-email indicator. Timers are driven from the frame tick.

use std::time::Instant;

use folio_core::constants::contact::{COPIED_DURATION, SEND_DELAY, SEND_FAILED_MESSAGE};
use folio_core::contact::FormField;
use folio_core::content::Owner;
use folio_core::{ContactForm, SubmitOutcome};

/// Where a submission stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Mail client opened, waiting out the send delay
    Sending { since: Instant },
    Sent,
    Error(String),
}

#[derive(Debug, Default)]
pub struct ContactState {
    pub form: ContactForm,
    /// Field receiving keystrokes; `None` when not editing
    pub focus: Option<FormField>,
    pub status: FormStatus,
    /// Fields flagged by the last failed submission
    pub invalid: Vec<FormField>,
    copied_at: Option<Instant>,
}

impl ContactState {
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn begin_editing(&mut self) {
        if self.focus.is_none() {
            self.focus = Some(FormField::Name);
        }
        if matches!(self.status, FormStatus::Sent) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn stop_editing(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.map(|f| f.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.map(|f| f.prev());
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.form.field_mut(field).push(c);
            self.invalid.retain(|f| *f != field);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.form.field_mut(field).pop();
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focus {
            self.form.field_mut(field).clear();
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.status, FormStatus::Sending { .. })
    }

    /// Validate the form
    ///
    /// Returns the mailto URI to open when the submission should go out.
    /// Validation failures become an error status; a filled honeypot is
    /// dropped silently.
    pub fn submit(&mut self, owner: &Owner, brand: &str, now: Instant) -> Option<String> {
        if self.is_sending() {
            return None;
        }
        match self.form.submit(owner, brand) {
            Ok(SubmitOutcome::Send { mailto }) => {
                self.invalid.clear();
                self.status = FormStatus::Sending { since: now };
                Some(mailto)
            }
            Ok(SubmitOutcome::Discarded) => {
                self.invalid.clear();
                self.status = FormStatus::Idle;
                None
            }
            Err(err) => {
                self.invalid = match &err {
                    folio_core::FormError::Incomplete { invalid } => invalid.clone(),
                };
                self.status = FormStatus::Error(err.to_string());
                None
            }
        }
    }

    /// The system opener could not hand off the mailto URI
    pub fn send_failed(&mut self) {
        self.status = FormStatus::Error(SEND_FAILED_MESSAGE.to_string());
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_DURATION)
    }

    /// Advance timers; returns true when something visible changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let FormStatus::Sending { since } = self.status {
            if now.saturating_duration_since(since) >= SEND_DELAY {
                tracing::info!("Contact message handed to mail client");
                self.status = FormStatus::Sent;
                self.form = ContactForm::new();
                self.focus = None;
                changed = true;
            }
        }

        if let Some(at) = self.copied_at {
            if now.saturating_duration_since(at) >= COPIED_DURATION {
                self.copied_at = None;
                changed = true;
            }
        }

        changed
    }
}
