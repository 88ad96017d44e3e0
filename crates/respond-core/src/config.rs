// Rust guideline compliant 2026-10-16

//! Configuration management for response building.

use crate::catalog::{MessageCatalog, MessageTable};
use crate::json::JsonOptions;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env::VarError;
use std::path::Path;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE: &str = "responses.toml";

const ENV_MESSAGE_PREFIX: &str = "RESPONSES_MESSAGE_";

/// Configuration for response building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Whether failed responses built from errors include the error source chain.
    #[serde(default)]
    pub include_stack_trace: bool,

    /// JSON encoding options.
    #[serde(default)]
    pub json: JsonOptions,

    /// Default messages keyed by status code.
    #[serde(default = "MessageTable::shipped", alias = "default_titles")]
    pub default_messages: MessageTable,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            include_stack_trace: false,
            json: JsonOptions::default(),
            default_messages: MessageTable::shipped(),
        }
    }
}

impl ResponseConfig {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/responses.toml`
    /// 3. Environment variables with `RESPONSES_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `responses.toml`
    ///
    /// # Returns
    ///
    /// A ResponseConfig with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML or invalid entries
    /// - An environment override has an invalid value
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded response config");
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `RESPONSES_JSON_ESCAPE_UNICODE` - Escape non-ASCII characters (true/false)
    /// - `RESPONSES_JSON_PRETTY` - Pretty print JSON (true/false)
    /// - `RESPONSES_INCLUDE_STACK_TRACE` - Include error chains in failures (true/false)
    /// - `RESPONSES_MESSAGE_<code>` - Default message for `<code>`
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(val) = read_bool_env("RESPONSES_JSON_ESCAPE_UNICODE")? {
            self.json.escape_unicode = val;
        }

        if let Some(val) = read_bool_env("RESPONSES_JSON_PRETTY")? {
            self.json.pretty = val;
        }

        if let Some(val) = read_bool_env("RESPONSES_INCLUDE_STACK_TRACE")? {
            self.include_stack_trace = val;
        }

        for (key, val) in std::env::vars_os() {
            let Some(key) = key.to_str() else {
                continue;
            };
            let Some(suffix) = key.strip_prefix(ENV_MESSAGE_PREFIX) else {
                continue;
            };
            let code: u16 = suffix.parse().map_err(|_| {
                crate::Error::InvalidConfig(format!(
                    "{} must end with a status code",
                    key
                ))
            })?;
            let val = val.into_string().map_err(|_| {
                crate::Error::InvalidConfig(format!("{} must be valid unicode", key))
            })?;
            self.default_messages.insert(code, val)?;
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory to write `responses.toml` into
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn read_bool_env(name: &str) -> Result<Option<bool>> {
    match std::env::var(name) {
        Ok(val) => val.trim().parse().map(Some).map_err(|_| {
            crate::Error::InvalidConfig(format!("{} must be true or false", name))
        }),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(crate::Error::InvalidConfig(format!(
            "{} must be valid unicode",
            name
        ))),
    }
}

impl MessageCatalog for ResponseConfig {
    fn default_message(&self, code: u16) -> Result<Option<Cow<'_, str>>> {
        self.default_messages.default_message(code)
    }
}
