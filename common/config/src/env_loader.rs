//! Environment variable loading for configuration.
//!
//! Reads `TOOLCALL_*` variables, falling back to the short `TC_` prefix.

use std::env;
use std::path::PathBuf;

use toolcall_protocol::RuntimeConfig;
use toolcall_protocol::ShellExecutionConfig;
use toolcall_protocol::ToolConfig;
use tracing::debug;

// Tool output
pub const ENV_ENABLE_OUTPUT_TRUNCATION: &str = "TOOLCALL_ENABLE_OUTPUT_TRUNCATION";
pub const ENV_TRUNCATE_OUTPUT_THRESHOLD: &str = "TOOLCALL_TRUNCATE_OUTPUT_THRESHOLD";
pub const ENV_TRUNCATE_OUTPUT_LINES: &str = "TOOLCALL_TRUNCATE_OUTPUT_LINES";

// Shell
pub const ENV_TERMINAL_WIDTH: &str = "TOOLCALL_TERMINAL_WIDTH";
pub const ENV_TERMINAL_HEIGHT: &str = "TOOLCALL_TERMINAL_HEIGHT";
pub const ENV_SHOW_COLOR: &str = "TOOLCALL_SHOW_COLOR";
pub const ENV_PAGER: &str = "TOOLCALL_PAGER";

// Runtime
pub const ENV_MODEL: &str = "TOOLCALL_MODEL";
pub const ENV_OUTPUT_DIR: &str = "TOOLCALL_OUTPUT_DIR";
pub const ENV_SESSION_ID: &str = "TOOLCALL_SESSION_ID";

const PRIMARY_PREFIX: &str = "TOOLCALL_";
const FALLBACK_PREFIX: &str = "TC_";

/// Environment loader for configuration.
#[derive(Debug, Default)]
pub struct EnvLoader;

impl EnvLoader {
    /// Create a new environment loader.
    pub fn new() -> Self {
        Self
    }

    /// Apply tool output overrides on top of `config`.
    pub fn apply_tool_config(&self, config: &mut ToolConfig) {
        if let Some(val) = self.get_bool(ENV_ENABLE_OUTPUT_TRUNCATION) {
            config.enable_output_truncation = val;
            debug!(env = ENV_ENABLE_OUTPUT_TRUNCATION, value = val, "loaded");
        }

        if let Some(val) = self.get_i32(ENV_TRUNCATE_OUTPUT_THRESHOLD) {
            config.truncate_output_threshold = val;
            debug!(env = ENV_TRUNCATE_OUTPUT_THRESHOLD, value = val, "loaded");
        }

        if let Some(val) = self.get_i32(ENV_TRUNCATE_OUTPUT_LINES) {
            config.truncate_output_lines = val;
            debug!(env = ENV_TRUNCATE_OUTPUT_LINES, value = val, "loaded");
        }
    }

    /// Apply shell overrides on top of `config`.
    pub fn apply_shell_config(&self, config: &mut ShellExecutionConfig) {
        if let Some(val) = self.get_u16(ENV_TERMINAL_WIDTH) {
            config.terminal_width = Some(val);
            debug!(env = ENV_TERMINAL_WIDTH, value = val, "loaded");
        }

        if let Some(val) = self.get_u16(ENV_TERMINAL_HEIGHT) {
            config.terminal_height = Some(val);
            debug!(env = ENV_TERMINAL_HEIGHT, value = val, "loaded");
        }

        if let Some(val) = self.get_bool(ENV_SHOW_COLOR) {
            config.show_color = val;
            debug!(env = ENV_SHOW_COLOR, value = val, "loaded");
        }

        if let Some(val) = self.get_string(ENV_PAGER) {
            debug!(env = ENV_PAGER, value = %val, "loaded");
            config.pager = val;
        }
    }

    /// Apply every override on top of `config`.
    pub fn apply(&self, config: &mut RuntimeConfig) {
        self.apply_tool_config(&mut config.tool);
        self.apply_shell_config(&mut config.shell);

        if let Some(val) = self.get_string(ENV_MODEL) {
            debug!(env = ENV_MODEL, value = %val, "loaded");
            config.model = val;
        }

        if let Some(val) = self.get_path(ENV_OUTPUT_DIR) {
            debug!(env = ENV_OUTPUT_DIR, value = %val.display(), "loaded");
            config.output_dir = val;
        }

        if let Some(val) = self.get_string(ENV_SESSION_ID) {
            debug!(env = ENV_SESSION_ID, value = %val, "loaded");
            config.session_id = val;
        }
    }

    /// Load a runtime config from defaults plus environment overrides.
    pub fn load_runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::default();
        self.apply(&mut config);
        config
    }

    /// Get a string value, trying the fallback prefix when unset.
    fn get_string(&self, key: &str) -> Option<String> {
        env::var(key).ok().or_else(|| {
            let suffix = key.strip_prefix(PRIMARY_PREFIX)?;
            env::var(format!("{FALLBACK_PREFIX}{suffix}")).ok()
        })
    }

    /// Get an i32 value from environment.
    ///
    /// Logs a warning if the value is set but cannot be parsed.
    fn get_i32(&self, key: &str) -> Option<i32> {
        self.get_string(key).and_then(|s| match s.trim().parse::<i32>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(key, value = %s, "Failed to parse i32 from env var");
                None
            }
        })
    }

    fn get_u16(&self, key: &str) -> Option<u16> {
        self.get_string(key).and_then(|s| match s.trim().parse::<u16>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(key, value = %s, "Failed to parse u16 from env var");
                None
            }
        })
    }

    /// Get a boolean value from environment.
    ///
    /// Accepts "1"/"true"/"yes" and "0"/"false"/"no" (case-insensitive).
    /// Anything else is logged and ignored.
    fn get_bool(&self, key: &str) -> Option<bool> {
        let s = self.get_string(key)?;
        match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" => Some(false),
            _ => {
                tracing::warn!(key, value = %s, "Unrecognized boolean value, ignoring");
                None
            }
        }
    }

    fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get_string(key)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
#[path = "env_loader.test.rs"]
mod tests;
