use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a message string is empty or the fallback shell
    /// path does not point at a file
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_messages()?;
        self.validate_fallback()?;
        Ok(())
    }

    fn validate_messages(&self) -> anyhow::Result<()> {
        for (key, value) in [
            ("missing_params", &self.messages.missing_params),
            ("not_found", &self.messages.not_found),
            ("server_error", &self.messages.server_error),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("messages.{key} must not be empty");
            }
        }
        Ok(())
    }

    fn validate_fallback(&self) -> anyhow::Result<()> {
        if let Some(ref path) = self.fallback.path
            && !path.is_file()
        {
            anyhow::bail!("fallback.path does not exist: {}", path.display());
        }
        Ok(())
    }
}
