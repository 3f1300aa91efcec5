//! Axum route handler for the contact form.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::contact::controller::{ContactForm, Notice, SubmitOutcome};
use crate::contact::validation::ContactFields;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub notice: Notice,
}

/// POST /api/v1/contact
///
/// Each request is its own form instance: validate, relay once, report.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(fields): Json<ContactFields>,
) -> Result<Json<ContactResponse>, AppError> {
    let mut form = ContactForm::with_fields(state.delivery.clone(), fields);

    match form.submit(state.email.as_ref()).await {
        SubmitOutcome::Sent => Ok(Json(ContactResponse {
            status: "sent",
            notice: Notice::SENT,
        })),
        SubmitOutcome::Invalid(errors) => Err(AppError::InvalidForm(errors)),
        SubmitOutcome::Busy => Err(AppError::SubmissionInFlight),
        SubmitOutcome::Failed => Err(AppError::Delivery),
    }
}
