//! Configuration management for contact-relay
//!
//! Configuration is loaded once at startup from multiple sources, lowest to
//! highest precedence:
//!
//! 1. Hardcoded defaults
//! 2. `./config.toml`, or the file passed with `--config`
//! 3. Environment variables with the `CONTACT_RELAY_` prefix, `__` for nesting
//!    (e.g. `CONTACT_RELAY_SMTP__TIMEOUT_SECS=10`)
//! 4. The flat deployment keys `EMAIL_USER`, `EMAIL_PASS`, `EMAIL_TO`, `PORT`
//!
//! `EMAIL_USER`, `EMAIL_PASS` and `EMAIL_TO` are taken verbatim as strings, so
//! a password such as `12345678` or `true` is not reinterpreted as a number or
//! boolean.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! cors_origins = ["http://localhost:5173"]
//!
//! [smtp]
//! host = "smtp.gmail.com"
//! port = 587
//! username = "relay@example.com"
//! password = "app-password"
//! timeout_secs = 30
//!
//! [contact]
//! recipient = "owner@example.com"
//!
//! [email]
//! backend = "smtp"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::email::SmtpConfig;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5174".to_string(),
                "http://localhost:5175".to_string(),
            ],
        }
    }
}

/// Where relayed submissions go
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    /// Fixed recipient of every submission
    pub recipient: String,

    /// From address; falls back to the SMTP username when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

/// Which email backend delivers submissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackendKind {
    /// Send through the configured SMTP relay
    #[default]
    Smtp,
    /// Log emails instead of sending them
    Console,
}

/// Email backend selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    /// Backend used to deliver submissions
    pub backend: EmailBackendKind,
}

/// Complete contact-relay configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// SMTP relay settings
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// Recipient and sender addresses
    #[serde(default)]
    pub contact: ContactSettings,

    /// Email backend selection
    #[serde(default)]
    pub email: EmailSettings,
}

/// Flat deployment variables and the string settings they fill
const FLAT_STRING_KEYS: [(&str, &str); 3] = [
    ("EMAIL_USER", "smtp.username"),
    ("EMAIL_PASS", "smtp.password"),
    ("EMAIL_TO", "contact.recipient"),
];

impl RelayConfig {
    /// Load configuration from `./config.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong type
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from a specific file (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - A value fails type conversion
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = Self::figment(path)?.extract()?;
        Ok(config)
    }

    /// Layered figment used by [`Self::load_from`]
    ///
    /// # Errors
    ///
    /// Returns an error if the defaults cannot be serialized to TOML
    pub fn figment(path: &Path) -> anyhow::Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment
            .merge(Env::prefixed("CONTACT_RELAY_").split("__").lowercase(true))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));

        for (var, key) in FLAT_STRING_KEYS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        Ok(figment)
    }

    /// Address used in the From header
    #[must_use]
    pub fn sender_address(&self) -> &str {
        self.contact
            .sender
            .as_deref()
            .unwrap_or(&self.smtp.username)
    }

    /// Check that the configuration can deliver submissions
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.contact.recipient.is_empty() {
            anyhow::bail!("no recipient configured (set EMAIL_TO or contact.recipient)");
        }

        if self.sender_address().is_empty() {
            anyhow::bail!("no sender configured (set EMAIL_USER or contact.sender)");
        }

        if self.email.backend == EmailBackendKind::Smtp {
            if self.smtp.username.is_empty() || self.smtp.password.is_empty() {
                anyhow::bail!("SMTP credentials missing (set EMAIL_USER and EMAIL_PASS)");
            }
            if self.smtp.port == 0 {
                anyhow::bail!("smtp.port must be non-zero");
            }
            if self.smtp.timeout_secs == 0 {
                anyhow::bail!("smtp.timeout_secs must be non-zero");
            }
        }

        Ok(())
    }

    /// Default configuration file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from("./config.toml")
    }
}
