//! contact-relay: contact form backend that relays submissions over SMTP
//!
//! A single `POST /api/contact` endpoint accepts `{name, email, subject,
//! message}`, checks that every field is present, renders an HTML email to
//! a fixed recipient with the visitor as Reply-To, and delivers it through an
//! SMTP relay (STARTTLS, authenticated, one connection per submission).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use contact_relay::{config::RelayConfig, observability, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     observability::init()?;
//!     let config = RelayConfig::load()?;
//!     server::serve(config).await
//! }
//! ```

pub mod config;
pub mod contact;
pub mod email;
pub mod error;
pub mod handlers;
pub mod health;
pub mod observability;
pub mod server;
pub mod state;
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::RelayConfig;
    pub use crate::contact::{ContactService, ContactSubmission, SubmissionResult, SubmissionStatus};
    pub use crate::email::{Email, EmailError, EmailSender};
    pub use crate::error::ContactError;
    pub use crate::state::AppState;
}
