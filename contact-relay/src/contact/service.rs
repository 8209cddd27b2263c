//! Validation, composition and delivery of contact submissions

use std::sync::Arc;

use tracing::{debug, error, info};
use validator::Validate;

use super::{ContactNotification, ContactSubmission, SubmissionResult};
use crate::email::{Email, EmailError, EmailSender};
use crate::error::ContactError;

/// Prefix prepended to the visitor's subject on the relayed email
pub const SUBJECT_PREFIX: &str = "New Contact Form Submission: ";

/// Relays contact submissions to a fixed recipient
///
/// Holds no per-request state; clones share the same sender.
#[derive(Clone)]
pub struct ContactService {
    sender: Arc<dyn EmailSender>,
    from: String,
    recipient: String,
}

impl ContactService {
    /// Create a service sending from `from` to `recipient` through `sender`
    pub fn new(
        sender: Arc<dyn EmailSender>,
        from: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            from: from.into(),
            recipient: recipient.into(),
        }
    }

    /// Validate a submission and relay it as one email
    ///
    /// # Errors
    ///
    /// - [`ContactError::Validation`] if any field is empty; nothing is sent
    /// - [`ContactError::Delivery`] if the email cannot be composed or sent
    pub async fn handle(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionResult, ContactError> {
        if let Err(errors) = submission.validate() {
            let fields: Vec<_> = errors.field_errors().into_keys().collect();
            debug!(?fields, "Rejected incomplete contact submission");
            return Err(ContactError::Validation);
        }

        match self.deliver(&submission).await {
            Ok(()) => {
                info!(
                    to = %self.recipient,
                    subject = %submission.subject,
                    "Contact submission relayed"
                );
                Ok(SubmissionResult::success())
            }
            Err(err) => {
                error!(error = %err, to = %self.recipient, "Failed to relay contact submission");
                Err(ContactError::Delivery(err))
            }
        }
    }

    /// Build the outbound email for a submission
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if rendering fails
    pub fn compose(&self, submission: &ContactSubmission) -> Result<Email, EmailError> {
        let email = Email::from_template(&ContactNotification::new(submission))?
            .from(&self.from)
            .to(&self.recipient)
            .reply_to(&submission.email)
            .subject(&format!("{SUBJECT_PREFIX}{}", submission.subject));
        Ok(email)
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), EmailError> {
        let email = self.compose(submission)?;
        self.sender.send(email).await
    }
}
