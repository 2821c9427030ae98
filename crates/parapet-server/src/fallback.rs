use std::sync::Arc;

use parapet_config::FallbackConfig;

/// Built-in entry shell used when no document is configured
const DEFAULT_SHELL: &str = "<!doctype html>\n<html>\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>parapet</title>\n  </head>\n  <body>\n    <div id=\"app\"></div>\n  </body>\n</html>\n";

/// The static shell served to requests the gate does not admit
///
/// The document is the mount point for client-side rendering. It is read
/// once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct FallbackShell(Arc<str>);

impl FallbackShell {
    /// Load the configured shell document, or fall back to the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if a configured path cannot be read
    pub fn load(config: &FallbackConfig) -> anyhow::Result<Self> {
        let document = match &config.path {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read fallback shell {}: {e}", path.display()))?,
            None => DEFAULT_SHELL.to_owned(),
        };

        Ok(Self(document.into()))
    }

    /// The shell document
    pub fn document(&self) -> String {
        self.0.to_string()
    }
}
