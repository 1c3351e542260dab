/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Submission state machine of the contact form.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──────────▶ Success(msg) ──edit/submit──▶ Idle
//!   │                   └──error/timeout/status─▶ Failure(msg) ──edit/submit──▶ Idle
//!   └──validation fails──────────────────────────▶ Failure(reason)
//! ```
//!
//! A submission is split into [`ContactForm::begin_submit`] and
//! [`ContactForm::complete_submit`] so a UI can keep the form in a reactive
//! signal and run the request on its own executor. [`ContactForm::submit`]
//! chains both around a [`WebhookClient`].

use zynor_contact_types::ContactRequest;

use crate::client::WebhookClient;
use crate::error::SubmitError;
use crate::form::{Field, FormState};
use crate::validation::{validate, ValidationError};

/// Confirmation shown after the webhook accepted the message.
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";

/// Where the form is in its submit cycle. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Failure(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Contact form controller: field values plus submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    form: FormState,
    status: SubmissionStatus,
    invalid: Option<ValidationError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Validation error of the last rejected submit, for inline display.
    pub fn invalid(&self) -> Option<ValidationError> {
        self.invalid
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Apply a keystroke to `field`.
    ///
    /// A finished submission (success or failure) goes back to idle so
    /// stale banners disappear once the visitor edits again. Edits made
    /// while a request is in flight keep the status untouched.
    pub fn update(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
        if self.invalid.is_some_and(|err| err.field() == field) {
            self.invalid = None;
        }
        if matches!(
            self.status,
            SubmissionStatus::Success(_) | SubmissionStatus::Failure(_)
        ) {
            log::debug!("Contact form edited, status back to idle");
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Start a submission.
    ///
    /// Returns the payload to send, or `None` when nothing must be sent:
    /// either a request is already in flight, or validation failed and the
    /// status moved straight to [`SubmissionStatus::Failure`].
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.status.is_submitting() {
            log::debug!("Ignoring submit while a request is in flight");
            return None;
        }

        self.status = SubmissionStatus::Idle;
        self.invalid = None;

        if let Err(err) = validate(&self.form) {
            log::debug!("Contact form invalid: {err}");
            self.invalid = Some(err);
            self.status = SubmissionStatus::Failure(err.to_string());
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        Some(self.form.to_request())
    }

    /// Resolve the in-flight submission with the webhook outcome.
    ///
    /// Success empties the form; failure keeps every value so the visitor
    /// can retry. Ignored unless a submission is in flight.
    pub fn complete_submit(&mut self, outcome: Result<(), SubmitError>) {
        if !self.status.is_submitting() {
            log::warn!("Ignoring submission result with no request in flight");
            return;
        }

        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
            }
            Err(err) => {
                log::warn!("Contact submission failed: {err}");
                self.status = SubmissionStatus::Failure(err.user_message().to_string());
            }
        }
    }

    /// Validate, send once through `client`, and resolve.
    pub async fn submit(&mut self, client: &WebhookClient) -> &SubmissionStatus {
        if let Some(request) = self.begin_submit() {
            let outcome = client.send(&request).await;
            self.complete_submit(outcome);
        }
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{REJECTED_MESSAGE, TIMEOUT_MESSAGE};

    fn filled() -> ContactForm {
        let mut contact = ContactForm::new();
        contact.update(Field::Name, "John");
        contact.update(Field::Email, "a@b.com");
        contact.update(Field::Phone, "1234567890");
        contact.update(Field::Message, "hello");
        contact
    }

    #[test]
    fn starts_idle_and_empty() {
        let contact = ContactForm::new();
        assert_eq!(contact.status(), &SubmissionStatus::Idle);
        assert!(contact.form().is_empty());
        assert!(!contact.is_submitting());
    }

    #[test]
    fn valid_form_enters_submitting_with_payload() {
        let mut contact = filled();
        let request = contact.begin_submit().expect("payload");
        assert_eq!(request.phone, "123-456-7890");
        assert!(contact.is_submitting());
    }

    #[test]
    fn invalid_form_fails_without_payload() {
        let mut contact = filled();
        contact.update(Field::Name, "   ");
        assert_eq!(contact.begin_submit(), None);
        assert_eq!(
            contact.status(),
            &SubmissionStatus::Failure("Please enter your name.".to_string())
        );
        assert_eq!(contact.invalid(), Some(ValidationError::MissingName));
    }

    #[test]
    fn second_begin_while_submitting_is_a_no_op() {
        let mut contact = filled();
        assert!(contact.begin_submit().is_some());
        assert_eq!(contact.begin_submit(), None);
        assert!(contact.is_submitting());
    }

    #[test]
    fn success_clears_fields() {
        let mut contact = filled();
        contact.begin_submit();
        contact.complete_submit(Ok(()));
        assert_eq!(contact.status().success_message(), Some(SUCCESS_MESSAGE));
        assert!(contact.form().is_empty());
        assert!(!contact.form().phone_touched());
    }

    #[test]
    fn failure_keeps_fields() {
        let mut contact = filled();
        let before = contact.form().clone();
        contact.begin_submit();
        contact.complete_submit(Err(SubmitError::Rejected {
            status: 502,
            body: String::new(),
        }));
        assert_eq!(contact.status().error_message(), Some(REJECTED_MESSAGE));
        assert_eq!(contact.form(), &before);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut contact = filled();
        contact.complete_submit(Err(SubmitError::Timeout));
        assert_eq!(contact.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn edit_after_result_returns_to_idle() {
        let mut contact = filled();
        contact.begin_submit();
        contact.complete_submit(Err(SubmitError::Timeout));
        assert_eq!(contact.status().error_message(), Some(TIMEOUT_MESSAGE));

        contact.update(Field::Message, "hello again");
        assert_eq!(contact.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn edit_while_submitting_keeps_status() {
        let mut contact = filled();
        contact.begin_submit();
        contact.update(Field::Message, "one more thing");
        assert!(contact.is_submitting());
    }

    #[test]
    fn fixing_the_flagged_field_clears_inline_error() {
        let mut contact = filled();
        contact.update(Field::Phone, "123");
        contact.begin_submit();
        assert_eq!(contact.invalid(), Some(ValidationError::InvalidPhone));

        contact.update(Field::Name, "Jane");
        assert_eq!(contact.invalid(), Some(ValidationError::InvalidPhone));

        contact.update(Field::Phone, "1234567890");
        assert_eq!(contact.invalid(), None);
    }
}
