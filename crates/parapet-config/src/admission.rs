use serde::Deserialize;

/// Admission gate configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdmissionConfig {
    /// Bypass the gate so every request proceeds
    ///
    /// Eases interactive debugging in local development; leave off in any
    /// deployed environment.
    #[serde(default)]
    pub permissive: bool,
}
