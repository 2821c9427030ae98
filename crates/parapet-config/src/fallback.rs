use std::path::PathBuf;

use serde::Deserialize;

/// Fallback shell configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    /// Static HTML document served to requests the gate does not admit
    ///
    /// A built-in minimal shell is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
