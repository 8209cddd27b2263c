//! Shared application state

use std::sync::Arc;

use crate::contact::ContactService;
use crate::email::EmailSender;
use crate::observability::ObservabilityConfig;

/// State shared by every request handler
///
/// Cheap to clone; everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    contact: Arc<ContactService>,
    observability: Arc<ObservabilityConfig>,
}

impl AppState {
    /// Create state around a contact service
    #[must_use]
    pub fn new(contact: ContactService, observability: ObservabilityConfig) -> Self {
        Self {
            contact: Arc::new(contact),
            observability: Arc::new(observability),
        }
    }

    /// Convenience constructor wiring a sender straight into a [`ContactService`]
    pub fn with_sender(
        sender: Arc<dyn EmailSender>,
        from: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self::new(
            ContactService::new(sender, from, recipient),
            ObservabilityConfig::default(),
        )
    }

    /// The contact service
    #[must_use]
    pub fn contact(&self) -> &ContactService {
        &self.contact
    }

    /// Service identity used in logs and health responses
    #[must_use]
    pub fn observability(&self) -> &ObservabilityConfig {
        &self.observability
    }
}
