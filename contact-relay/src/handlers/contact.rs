//! `POST /api/contact`

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::contact::{ContactSubmission, SubmissionResult};
use crate::error::ContactError;
use crate::state::AppState;

/// Relay a contact form submission
///
/// A body that is not a JSON object of string fields cannot supply the
/// required fields, so it is rejected as a validation failure.
///
/// # Errors
///
/// Returns [`ContactError`], rendered as a 400 or 500 JSON body.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<SubmissionResult>, ContactError> {
    let Json(submission) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected unreadable contact submission");
        ContactError::Validation
    })?;

    state.contact().handle(submission).await.map(Json)
}
