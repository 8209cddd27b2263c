//! Delivery seam between the contact service and a mail backend

use async_trait::async_trait;

use super::{Email, EmailError};

/// Hands a composed notification to whatever delivers it
///
/// [`super::SmtpBackend`] relays over SMTP and [`super::ConsoleBackend`] logs.
/// [`crate::testing`] has in-memory doubles. One call is one delivery attempt;
/// implementations do not retry.
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use contact_relay::contact::ContactService;
/// use contact_relay::email::{ConsoleBackend, EmailSender};
///
/// let sender: Arc<dyn EmailSender> = Arc::new(ConsoleBackend::new());
/// let service = ContactService::new(sender, "relay@example.com", "owner@example.com");
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver `email`
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the email is incomplete, an address cannot be
    /// parsed, or the backend fails to deliver it
    async fn send(&self, email: Email) -> Result<(), EmailError>;
}
