use std::{env, fs, path::Path};

use tracing::{debug, instrument, warn};

use super::{DiscoveryConfig, ENV_ACCOUNT_PREFIX, ENV_FORCE_NUM_MODEMS, ENV_MODEM_PREFIX};
use crate::{OfonoError, Result};

impl DiscoveryConfig {
    /// Builds the configuration from the process environment alone.
    pub fn from_env() -> Self {
        Self::default().with_env_lookup(|key| env::var(key).ok())
    }

    /// Loads a TOML configuration file and layers the process environment on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// carries an invalid value.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| OfonoError::io(e, path))?;
        let config = Self::from_toml_str(&content, Some(path))?;

        Ok(config.with_env_lookup(|key| env::var(key).ok()))
    }

    /// Parses configuration from TOML text without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or carries an invalid value.
    pub fn from_toml_str(content: &str, path: Option<&Path>) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| OfonoError::toml_parse(e, path))?;
        config.validate()?;

        Ok(config)
    }

    /// Overlays environment values obtained through `lookup` onto this config.
    ///
    /// A modem-count override that is not an integer is ignored (with a
    /// warning) and the previous value is kept.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_FORCE_NUM_MODEMS) {
            match raw.trim().parse::<i32>() {
                Ok(count) => {
                    debug!("forced number of modems: {count}");
                    self.force_num_modems = Some(count);
                }
                Err(e) => {
                    warn!("Ignoring {ENV_FORCE_NUM_MODEMS}={raw:?}: {e}");
                }
            }
        }

        if let Some(prefix) = lookup(ENV_MODEM_PREFIX) {
            self.modem_prefix = Some(prefix);
        }

        if let Some(prefix) = lookup(ENV_ACCOUNT_PREFIX) {
            self.account_prefix = Some(prefix);
        }

        self
    }

    fn validate(&self) -> Result<()> {
        if self.query_timeout_secs == 0 {
            return Err(OfonoError::InvalidConfigField {
                field: "query_timeout_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}
