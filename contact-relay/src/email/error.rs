//! Email error types

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when composing or sending an email
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipients
    #[error("email must have at least one recipient")]
    NoRecipients,

    /// Email has no sender
    #[error("email must have a from address")]
    NoSender,

    /// Email has no subject
    #[error("email must have a subject")]
    NoSubject,

    /// Email has no body content
    #[error("email must have either text or HTML content")]
    NoContent,

    /// Invalid email address format
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error
    #[error("failed to render email template: {0}")]
    TemplateError(#[from] askama::Error),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    SmtpError(String),

    /// The relay did not complete the exchange in time
    #[error("SMTP delivery timed out after {0:?}")]
    Timeout(Duration),
}

impl EmailError {
    /// Create an SMTP error from a string message
    #[must_use]
    pub fn smtp<T: Into<String>>(msg: T) -> Self {
        Self::SmtpError(msg.into())
    }
}
