//! Contact form submission lifecycle.
//!
//! ```text
//! Idle ──submit──▶ (validate) ──invalid──▶ Idle + field errors
//!                      │
//!                    valid
//!                      ▼
//!                   Sending ──200──────────▶ Succeeded (fields cleared)
//!                      └────other / error──▶ Failed    (fields kept)
//! ```
//!
//! `Succeeded` and `Failed` both accept a new submission. Only `Sending` blocks one.

use serde::Serialize;
use tracing::{error, info};

use crate::contact::payload::{build_template_params, DeliveryTarget};
use crate::contact::validation::{validate, ContactFields, Field, FieldErrors};
use crate::email_client::{EmailError, EmailSender, SendResponse, TemplateParams};

pub const SUCCESS_NOTICE: &str = "Message sent successfully! I will get back to you soon.";
pub const FAILURE_NOTICE: &str = "Failed to send message. Please try again or contact me directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// User-facing notification. Never carries provider error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: &'static str,
}

impl Notice {
    pub const SENT: Notice = Notice {
        severity: Severity::Success,
        message: SUCCESS_NOTICE,
    };
    pub const FAILED: Notice = Notice {
        severity: Severity::Error,
        message: FAILURE_NOTICE,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// A send is already in flight for this form.
    Busy,
    Sent,
    Failed,
}

/// One contact form instance: field values, inline errors, and where the
/// submission lifecycle currently stands.
#[derive(Debug, Clone)]
pub struct ContactForm {
    target: DeliveryTarget,
    fields: ContactFields,
    errors: FieldErrors,
    submission: Submission,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new(target: DeliveryTarget) -> Self {
        Self::with_fields(target, ContactFields::default())
    }

    pub fn with_fields(target: DeliveryTarget, fields: ContactFields) -> Self {
        Self {
            target,
            fields,
            errors: FieldErrors::default(),
            submission: Submission::Idle,
            notice: None,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn can_submit(&self) -> bool {
        self.submission != Submission::Sending
    }

    /// Updates one field and drops that field's error, if any. Other errors stay.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.clear_field(field);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Synchronous half of a submission: validates and, when valid, moves to `Sending`
    /// and returns the payload to deliver.
    ///
    /// Split from [`complete_submit`](Self::complete_submit) so callers that share the
    /// form behind a lock need not hold it across the network call.
    pub fn begin_submit(&mut self) -> Result<TemplateParams, SubmitOutcome> {
        if !self.can_submit() {
            return Err(SubmitOutcome::Busy);
        }

        let validation = validate(&self.fields);
        self.errors = validation.errors;
        if !validation.is_valid {
            self.submission = Submission::Idle;
            return Err(SubmitOutcome::Invalid(self.errors.clone()));
        }

        self.submission = Submission::Sending;
        self.notice = None;
        Ok(build_template_params(
            &self.fields,
            &self.target.recipient_name,
        ))
    }

    /// Applies the delivery result to a form in `Sending`.
    pub fn complete_submit(&mut self, result: Result<SendResponse, EmailError>) -> SubmitOutcome {
        match result {
            Ok(response) if response.is_success() => {
                info!("Contact message delivered");
                self.submission = Submission::Succeeded;
                self.fields = ContactFields::default();
                self.errors = FieldErrors::default();
                self.notice = Some(Notice::SENT);
                SubmitOutcome::Sent
            }
            other => {
                match other {
                    Ok(response) => error!(
                        status = response.status,
                        "Contact message rejected by email provider: {}", response.text
                    ),
                    Err(e) => error!("Contact message delivery failed: {e}"),
                }
                self.submission = Submission::Failed;
                self.notice = Some(Notice::FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Full submission: validate, send exactly once, apply the outcome.
    pub async fn submit(&mut self, sender: &dyn EmailSender) -> SubmitOutcome {
        let params = match self.begin_submit() {
            Ok(params) => params,
            Err(outcome) => return outcome,
        };

        let result = sender
            .send(&self.target.service_id, &self.target.template_id, &params)
            .await;

        self.complete_submit(result)
    }
}
