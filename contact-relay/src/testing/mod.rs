//! Test doubles for the email subsystem
//!
//! Used by the integration tests to drive the HTTP surface without a relay.
//!
//! ```rust
//! use contact_relay::email::{Email, EmailSender};
//! use contact_relay::testing::RecordingEmailSender;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let recorder = RecordingEmailSender::new();
//!
//! let email = Email::new()
//!     .to("owner@example.com")
//!     .from("relay@example.com")
//!     .subject("Test")
//!     .text("Hello");
//!
//! recorder.send(email).await?;
//!
//! assert_eq!(recorder.sent_count(), 1);
//! assert!(recorder.was_sent_to("owner@example.com"));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::email::{Email, EmailError, EmailSender};

/// Captures sent emails in memory for assertions
#[derive(Debug, Clone, Default)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingEmailSender {
    /// Create a new recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emails sent
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }

    /// All sent emails, oldest first
    #[must_use]
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent.lock().clone()
    }

    /// The most recently sent email
    #[must_use]
    pub fn last_sent(&self) -> Option<Email> {
        self.sent.lock().last().cloned()
    }

    /// Whether any email was sent to `address`
    #[must_use]
    pub fn was_sent_to(&self, address: &str) -> bool {
        self.sent
            .lock()
            .iter()
            .any(|email| email.to.iter().any(|to| to == address))
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.validate()?;
        self.sent.lock().push(email);
        Ok(())
    }
}

/// Fails every send with a fixed SMTP error and counts attempts
#[derive(Debug, Clone)]
pub struct FailingEmailSender {
    reason: String,
    attempts: Arc<Mutex<usize>>,
}

impl FailingEmailSender {
    /// Fail with the given SMTP error text
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of sends attempted
    #[must_use]
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _email: Email) -> Result<(), EmailError> {
        *self.attempts.lock() += 1;
        Err(EmailError::smtp(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::new()
            .to("owner@example.com")
            .from("relay@example.com")
            .subject("Test")
            .text("Hello")
    }

    #[tokio::test]
    async fn test_recording_sender_captures_emails() {
        let recorder = RecordingEmailSender::new();

        recorder.send(email()).await.unwrap();
        recorder.send(email().subject("Second")).await.unwrap();

        assert_eq!(recorder.sent_count(), 2);
        assert_eq!(
            recorder.last_sent().and_then(|e| e.subject),
            Some("Second".to_string())
        );
        assert!(recorder.was_sent_to("owner@example.com"));
        assert!(!recorder.was_sent_to("someone@example.com"));
    }

    #[tokio::test]
    async fn test_recording_sender_rejects_invalid_email() {
        let recorder = RecordingEmailSender::new();

        let result = recorder.send(Email::new()).await;

        assert!(matches!(result, Err(EmailError::NoRecipients)));
        assert_eq!(recorder.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_sender_counts_attempts() {
        let failing = FailingEmailSender::new("535 authentication failed");

        let result = failing.send(email()).await;

        assert!(matches!(result, Err(EmailError::SmtpError(reason)) if reason.contains("535")));
        assert_eq!(failing.attempts(), 1);
    }
}
