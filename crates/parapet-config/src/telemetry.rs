use serde::Deserialize;

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `tracing` filter directive, e.g. `info` or `parapet_core=debug`
    #[serde(default)]
    pub filter: Option<String>,
    /// Log line format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format for the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
