//! SMTP backend for sending emails
//!
//! Uses the `lettre` crate to send emails via an SMTP relay. Every call to
//! [`EmailSender::send`] opens its own connection, upgrades it with STARTTLS,
//! authenticates, transmits one message and closes the session.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::email::{Email, EmailError, EmailSender};

/// SMTP relay configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port (587 for STARTTLS)
    pub port: u16,

    /// SMTP username, also used as the default sender address
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Require STARTTLS (default: true)
    pub use_tls: bool,

    /// Upper bound for one complete delivery, in seconds
    pub timeout_secs: u64,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            use_tls: true,
            timeout_secs: 30,
        }
    }
}

impl SmtpConfig {
    /// Delivery timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Hand-written so the password never reaches logs.
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("use_tls", &self.use_tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// SMTP email backend
///
/// Sends emails via SMTP using the `lettre` crate.
///
/// # Examples
///
/// ```rust,no_run
/// use contact_relay::email::{Email, EmailSender, SmtpBackend, SmtpConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = SmtpBackend::new(SmtpConfig {
///     username: "relay@example.com".to_string(),
///     password: "app-password".to_string(),
///     ..SmtpConfig::default()
/// });
///
/// let email = Email::new()
///     .to("owner@example.com")
///     .from("relay@example.com")
///     .subject("Hello!")
///     .html("<p>Hello, World!</p>");
///
/// backend.send(email).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SmtpBackend {
    config: SmtpConfig,
}

impl SmtpBackend {
    /// Create a new SMTP backend with the given configuration
    #[must_use]
    pub const fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
        address
            .parse()
            .map_err(|_| EmailError::InvalidAddress(address.to_string()))
    }

    /// Build lettre Message from Email
    fn build_message(email: &Email) -> Result<Message, EmailError> {
        email.validate()?;

        let from_addr = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let mut builder = Message::builder().from(Self::parse_mailbox(from_addr)?);

        for to_addr in &email.to {
            builder = builder.to(Self::parse_mailbox(to_addr)?);
        }

        if let Some(reply_to_addr) = &email.reply_to {
            builder = builder.reply_to(Self::parse_mailbox(reply_to_addr)?);
        }

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        builder = builder.subject(subject);

        let message = if let (Some(html), Some(text)) = (&email.html, &email.text) {
            builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_PLAIN)
                                .body(text.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(html) = &email.html {
            builder
                .multipart(
                    MultiPart::alternative().singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html.clone()),
                    ),
                )
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(text) = &email.text {
            builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(text.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else {
            return Err(EmailError::NoContent);
        };

        Ok(message)
    }

    /// Create SMTP transport from config
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let mut transport = if self.config.use_tls {
            let tls_parameters = TlsParameters::new(self.config.host.clone())
                .map_err(|e| EmailError::smtp(format!("TLS parameters error: {e}")))?;

            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
                .map_err(|e| EmailError::smtp(e.to_string()))?
                .tls(Tls::Required(tls_parameters))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
        };

        if !self.config.username.is_empty() {
            transport = transport.credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ));
        }

        transport = transport
            .port(self.config.port)
            .timeout(Some(self.config.timeout()));

        Ok(transport.build())
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        let message = Self::build_message(&email)?;
        let transport = self.create_transport()?;
        let timeout = self.config.timeout();

        let response = tokio::time::timeout(timeout, transport.send(message))
            .await
            .map_err(|_| EmailError::Timeout(timeout))?
            .map_err(|e| EmailError::smtp(e.to_string()))?;

        debug!(
            host = %self.config.host,
            port = self.config.port,
            code = %response.code(),
            "SMTP relay accepted message"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_email() -> Email {
        Email::new()
            .to("owner@example.com")
            .from("relay@example.com")
            .reply_to("visitor@example.com")
            .subject("New Contact Form Submission: Test Subject")
            .text("Hello")
            .html("<p>Hello</p>")
    }

    #[test]
    fn test_smtp_config_defaults() {
        let config = SmtpConfig::default();

        assert_eq!(config.host, "smtp.gmail.com");
        assert_eq!(config.port, 587);
        assert!(config.use_tls);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_smtp_config_debug_redacts_password() {
        let config = SmtpConfig {
            password: "hunter2".to_string(),
            ..SmtpConfig::default()
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_build_message_headers() {
        let message = SmtpBackend::build_message(&contact_email()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("From: relay@example.com"));
        assert!(formatted.contains("To: owner@example.com"));
        assert!(formatted.contains("Reply-To: visitor@example.com"));
        assert!(formatted.contains("Subject: New Contact Form Submission: Test Subject"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("text/html"));
    }

    #[test]
    fn test_build_message_html_only_is_multipart() {
        let email = Email::new()
            .to("owner@example.com")
            .from("relay@example.com")
            .subject("Test")
            .html("<p>Hello</p>");

        let message = SmtpBackend::build_message(&email).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("multipart/alternative"));
    }

    #[test]
    fn test_build_message_rejects_bad_reply_to() {
        let email = contact_email().reply_to("not an address");

        let result = SmtpBackend::build_message(&email);
        assert!(matches!(result, Err(EmailError::InvalidAddress(addr)) if addr == "not an address"));
    }

    #[test]
    fn test_build_message_requires_sender() {
        let email = Email::new()
            .to("owner@example.com")
            .subject("Test")
            .text("Hello");

        assert!(matches!(
            SmtpBackend::build_message(&email),
            Err(EmailError::NoSender)
        ));
    }
}
