#![allow(clippy::must_use_candidate)]

pub mod admission;
mod env;
pub mod fallback;
pub mod health;
mod loader;
pub mod messages;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use admission::*;
pub use fallback::*;
pub use health::*;
pub use messages::*;
pub use server::*;
pub use telemetry::*;

/// Top-level parapet configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Admission gate configuration
    #[serde(default)]
    pub admission: AdmissionConfig,
    /// Fallback shell configuration
    #[serde(default)]
    pub fallback: FallbackConfig,
    /// User-facing error message catalog
    #[serde(default)]
    pub messages: MessageCatalog,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
