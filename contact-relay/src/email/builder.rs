//! Outbound message assembled by the contact service

use super::{EmailError, EmailTemplate};

/// A message ready to hand to an [`super::EmailSender`]
///
/// Bodies usually come from a rendered template; the envelope is filled in
/// from configuration and the visitor's address:
///
/// ```rust
/// use contact_relay::email::Email;
///
/// let email = Email::new()
///     .to("owner@example.com")
///     .from("relay@example.com")
///     .reply_to("visitor@example.com")
///     .subject("New Contact Form Submission: Hello")
///     .html("<p>Hello</p>");
///
/// assert!(email.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Email {
    /// To addresses (the site owner)
    pub to: Vec<String>,

    /// From address (the relay account)
    pub from: Option<String>,

    /// Reply-To address (the visitor)
    pub reply_to: Option<String>,

    /// Subject line
    pub subject: Option<String>,

    /// Plain-text part
    pub text: Option<String>,

    /// HTML part
    pub html: Option<String>,
}

impl Email {
    /// Empty message
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message whose bodies are rendered from `template`
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if rendering fails
    pub fn from_template<T: EmailTemplate>(template: &T) -> Result<Self, EmailError> {
        let (html, text) = template.render_email()?;
        Ok(Self {
            html,
            text,
            ..Self::default()
        })
    }

    /// Add a To address
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to.push(address.to_owned());
        self
    }

    /// Set the From address
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_owned());
        self
    }

    /// Set the Reply-To address
    #[must_use]
    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_owned());
        self
    }

    /// Set the subject line
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_owned());
        self
    }

    /// Set the plain-text part
    #[must_use]
    pub fn text(mut self, body: &str) -> Self {
        self.text = Some(body.to_owned());
        self
    }

    /// Set the HTML part
    #[must_use]
    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_owned());
        self
    }

    /// Check the message has an envelope, a subject and at least one body
    ///
    /// Addresses are not parsed here; backends report unparseable ones as
    /// `EmailError::InvalidAddress`.
    ///
    /// # Errors
    ///
    /// Returns the first missing piece, checked in the order recipient,
    /// sender, subject, body
    pub fn validate(&self) -> Result<(), EmailError> {
        match self {
            Self { to, .. } if to.is_empty() => Err(EmailError::NoRecipients),
            Self { from: None, .. } => Err(EmailError::NoSender),
            Self { subject: None, .. } => Err(EmailError::NoSubject),
            Self {
                text: None,
                html: None,
                ..
            } => Err(EmailError::NoContent),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner_notification() -> Email {
        Email::new()
            .to("owner@example.com")
            .from("relay@example.com")
            .reply_to("visitor@example.com")
            .subject("New Contact Form Submission: Pricing")
            .html("<p>How much?</p>")
    }

    #[test]
    fn test_builder_sets_envelope_and_body() {
        let email = owner_notification();

        assert_eq!(email.to, vec!["owner@example.com"]);
        assert_eq!(email.from.as_deref(), Some("relay@example.com"));
        assert_eq!(email.reply_to.as_deref(), Some("visitor@example.com"));
        assert_eq!(
            email.subject.as_deref(),
            Some("New Contact Form Submission: Pricing")
        );
        assert!(email.text.is_none());
        assert!(email.validate().is_ok());
    }

    #[test]
    fn test_reply_to_is_optional() {
        let email = Email {
            reply_to: None,
            ..owner_notification()
        };

        assert!(email.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_piece() {
        let cases = [
            (Email { to: Vec::new(), ..owner_notification() }, "recipient"),
            (Email { from: None, ..owner_notification() }, "from address"),
            (Email { subject: None, ..owner_notification() }, "subject"),
            (Email { html: None, ..owner_notification() }, "text or HTML"),
        ];

        for (email, expected) in cases {
            let err = email.validate().unwrap_err();
            assert!(err.to_string().contains(expected), "{err}");
        }
    }

    #[test]
    fn test_missing_recipient_wins_over_missing_body() {
        let email = Email::new().from("relay@example.com");

        assert!(matches!(email.validate(), Err(EmailError::NoRecipients)));
    }

    #[test]
    fn test_text_part_alone_is_enough() {
        let email = Email {
            html: None,
            ..owner_notification()
        }
        .text("How much?");

        assert!(email.validate().is_ok());
    }
}
