//! Error types and their HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::contact::SubmissionResult;
use crate::email::EmailError;

/// Caller-facing message for incomplete submissions
pub const VALIDATION_MESSAGE: &str = "All fields are required.";

/// Caller-facing message for any composition or delivery failure
pub const DELIVERY_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Failure of a contact submission
#[derive(Debug, Error)]
pub enum ContactError {
    /// One or more required fields were empty or absent (400)
    #[error("contact submission is missing required fields")]
    Validation,

    /// The email could not be composed or delivered (500)
    #[error("contact submission could not be delivered: {0}")]
    Delivery(#[source] EmailError),
}

impl ContactError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message shown to the caller. Never includes the underlying cause.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Validation => VALIDATION_MESSAGE,
            Self::Delivery(_) => DELIVERY_MESSAGE,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = SubmissionResult::error(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}
