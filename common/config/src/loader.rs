//! Configuration file loading.
//!
//! Reads `config.json` from the toolcall home directory and layers
//! environment overrides on top.

use std::path::Path;
use std::path::PathBuf;

use snafu::ResultExt;
use toolcall_protocol::RuntimeConfig;
use tracing::debug;

use crate::env_loader::EnvLoader;
use crate::error::ConfigError;
use crate::error::config_error::InvalidValueSnafu;
use crate::error::config_error::IoSnafu;
use crate::error::config_error::JsonParseSnafu;

/// Default configuration directory name under the user's home.
pub const DEFAULT_CONFIG_DIR: &str = ".toolcall";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.json";

/// Environment variable for a custom toolcall home directory.
pub const TOOLCALL_HOME_ENV: &str = "TOOLCALL_HOME";

/// Directory for saved tool output when none is configured.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "outputs";

/// Get the default configuration directory (`~/.toolcall`).
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CONFIG_DIR)
}

/// Find the toolcall home directory.
///
/// Checks `TOOLCALL_HOME` first; relative values resolve against the
/// current working directory.
pub fn find_toolcall_home() -> PathBuf {
    match std::env::var(TOOLCALL_HOME_ENV) {
        Ok(custom_home) if !custom_home.is_empty() => {
            let path = PathBuf::from(&custom_home);
            if path.is_absolute() {
                return path;
            }
            std::env::current_dir()
                .map(|cwd| cwd.join(&custom_home))
                .unwrap_or(path)
        }
        _ => default_config_dir(),
    }
}

/// Configuration loader for `config.json`.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    apply_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader for the toolcall home directory.
    pub fn new() -> Self {
        Self::from_path(find_toolcall_home())
    }

    /// Create a loader for a specific config directory.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            config_dir: path.as_ref().to_path_buf(),
            apply_env: true,
        }
    }

    /// Skip environment overrides.
    pub fn without_env(mut self) -> Self {
        self.apply_env = false;
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load the runtime configuration.
    ///
    /// A missing or empty file yields defaults. An empty `output_dir` is
    /// resolved to `{config_dir}/outputs`.
    pub fn load(&self) -> Result<RuntimeConfig, ConfigError> {
        let mut config = self.load_file(&self.config_dir.join(CONFIG_FILE))?;

        if self.apply_env {
            EnvLoader::new().apply(&mut config);
        }

        if config.output_dir.as_os_str().is_empty() {
            config.output_dir = self.config_dir.join(DEFAULT_OUTPUT_DIR_NAME);
        }

        validate(&config)?;
        Ok(config)
    }

    fn load_file(&self, path: &Path) -> Result<RuntimeConfig, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(RuntimeConfig::default());
        }

        let content = std::fs::read_to_string(path).context(IoSnafu {
            message: format!("Failed to read {}", path.display()),
        })?;

        if content.trim().is_empty() {
            debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(RuntimeConfig::default());
        }

        serde_json::from_str(&content).context(JsonParseSnafu {
            file: path.display().to_string(),
        })
    }
}

fn validate(config: &RuntimeConfig) -> Result<(), ConfigError> {
    if config.shell.pager.trim().is_empty() {
        return InvalidValueSnafu {
            field: "shell.pager",
            message: "must not be empty",
        }
        .fail();
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader.test.rs"]
mod tests;
