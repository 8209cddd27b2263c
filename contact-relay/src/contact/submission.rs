//! Request and response bodies for the contact endpoint

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message returned when a submission is relayed successfully
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// A contact form submission sent by a website visitor
///
/// Missing keys deserialize to empty strings so that an absent field and an
/// empty field are rejected the same way by [`Validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactSubmission {
    /// Visitor's name
    #[validate(length(min = 1))]
    pub name: String,

    /// Visitor's email address, used as Reply-To. Not format-checked.
    #[validate(length(min = 1))]
    pub email: String,

    /// Visitor-supplied subject line
    #[validate(length(min = 1))]
    pub subject: String,

    /// Message body
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactSubmission {
    /// Create a submission from its four fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Outcome status reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// The message was handed to the relay
    Success,
    /// The submission was rejected or could not be delivered
    Error,
}

/// JSON body returned for every request to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Outcome
    pub status: SubmissionStatus,
    /// Human-readable description of the outcome
    pub message: String,
}

impl SubmissionResult {
    /// The success result
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: SubmissionStatus::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// An error result carrying a caller-facing message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Error,
            message: message.into(),
        }
    }
}
