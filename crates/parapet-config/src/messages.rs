use serde::Deserialize;

/// User-facing error message strings, keyed by the failure kind they answer
///
/// Loaded once at startup; the contract layer only reads them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageCatalog {
    /// Shown when a required request parameter is absent
    #[serde(default = "default_missing_params")]
    pub missing_params: String,
    /// Shown when the referenced resource does not exist
    #[serde(default = "default_not_found")]
    pub not_found: String,
    /// Shown for any failure without a more specific mapping
    #[serde(default = "default_server_error")]
    pub server_error: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            missing_params: default_missing_params(),
            not_found: default_not_found(),
            server_error: default_server_error(),
        }
    }
}

fn default_missing_params() -> String {
    "Missing required parameters".to_string()
}

fn default_not_found() -> String {
    "Resource not found".to_string()
}

fn default_server_error() -> String {
    "Something went wrong".to_string()
}
