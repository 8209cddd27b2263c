//! Development backend that writes notifications to the log

use async_trait::async_trait;
use tracing::{debug, info};

use crate::email::{Email, EmailError, EmailSender};

/// Logs each notification instead of handing it to a relay
///
/// Selected with `email.backend = "console"` so the form can be exercised
/// without SMTP credentials. The envelope is logged at `info`; the rendered
/// bodies follow at `debug` when [`ConsoleBackend::with_bodies`] is used.
#[derive(Debug, Clone, Default)]
pub struct ConsoleBackend {
    log_bodies: bool,
}

impl ConsoleBackend {
    /// Log the envelope only
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the envelope and both rendered bodies
    #[must_use]
    pub const fn with_bodies() -> Self {
        Self { log_bodies: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.validate()?;

        info!(
            from = email.from.as_deref().unwrap_or_default(),
            to = ?email.to,
            reply_to = email.reply_to.as_deref().unwrap_or_default(),
            subject = email.subject.as_deref().unwrap_or_default(),
            "Notification logged instead of relayed"
        );

        if self.log_bodies {
            if let Some(text) = &email.text {
                debug!(text = %text, "Notification text part");
            }
            if let Some(html) = &email.html {
                debug!(html = %html, "Notification HTML part");
            }
        }

        Ok(())
    }
}
