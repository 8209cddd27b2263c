//! Email composition and delivery
//!
//! This module provides:
//! - A fluent [`Email`] builder
//! - The [`EmailSender`] trait with SMTP and console backends
//! - Askama template integration through [`EmailTemplate`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use contact_relay::email::{Email, EmailSender, SmtpBackend, SmtpConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SmtpBackend::new(SmtpConfig::default());
//!
//! let email = Email::new()
//!     .to("owner@example.com")
//!     .from("relay@example.com")
//!     .reply_to("visitor@example.com")
//!     .subject("New Contact Form Submission: Hello")
//!     .html("<p>Hello</p>");
//!
//! backend.send(email).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod builder;
mod error;
mod sender;
mod template;

pub use backend::{
    console::ConsoleBackend,
    smtp::{SmtpBackend, SmtpConfig},
};
pub use builder::Email;
pub use error::EmailError;
pub use sender::EmailSender;
pub use template::EmailTemplate;

#[cfg(test)]
pub use sender::MockEmailSender;
