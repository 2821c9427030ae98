//! Config construction helpers for tests

use parapet_config::{Config, MessageCatalog};

/// Builder producing a `Config` without touching the filesystem
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Bypass the admission gate
    pub fn permissive(mut self) -> Self {
        self.config.admission.permissive = true;
        self
    }

    /// Replace the error message catalog
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.config.messages = messages;
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
