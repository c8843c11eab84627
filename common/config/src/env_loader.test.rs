use super::*;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;

// Helper to set and cleanup env vars in tests
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        Self { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        self.keys.push(key.to_string());
        // SAFETY: tests touching the environment are serialized
        unsafe { env::set_var(key, value) };
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            // SAFETY: tests touching the environment are serialized
            unsafe { env::remove_var(key) };
        }
    }
}

#[test]
#[serial]
fn test_load_runtime_config_default() {
    let config = EnvLoader::new().load_runtime_config();
    assert_eq!(config, RuntimeConfig::default());
}

#[test]
#[serial]
fn test_load_tool_config_from_env() {
    let mut guard = EnvGuard::new();
    guard.set(ENV_TRUNCATE_OUTPUT_THRESHOLD, "500");
    guard.set(ENV_TRUNCATE_OUTPUT_LINES, "5");
    guard.set(ENV_ENABLE_OUTPUT_TRUNCATION, "no");

    let mut config = ToolConfig::default();
    EnvLoader::new().apply_tool_config(&mut config);
    assert_eq!(config.truncate_output_threshold, 500);
    assert_eq!(config.truncate_output_lines, 5);
    assert!(!config.enable_output_truncation);
}

#[test]
#[serial]
fn test_fallback_prefix() {
    let mut guard = EnvGuard::new();
    guard.set("TC_TRUNCATE_OUTPUT_LINES", "42");
    guard.set("TC_MODEL", "fallback-model");
    guard.set(ENV_MODEL, "primary-model");

    let config = EnvLoader::new().load_runtime_config();
    assert_eq!(config.tool.truncate_output_lines, 42);
    assert_eq!(config.model, "primary-model");
}

#[test]
#[serial]
fn test_invalid_values_are_ignored() {
    let mut guard = EnvGuard::new();
    guard.set(ENV_TRUNCATE_OUTPUT_THRESHOLD, "lots");
    guard.set(ENV_SHOW_COLOR, "maybe");
    guard.set(ENV_TERMINAL_WIDTH, "-3");

    let config = EnvLoader::new().load_runtime_config();
    assert_eq!(
        config.tool.truncate_output_threshold,
        toolcall_protocol::DEFAULT_TRUNCATE_OUTPUT_THRESHOLD
    );
    assert!(!config.shell.show_color);
    assert_eq!(config.shell.terminal_width, None);
}

#[test]
#[serial]
fn test_shell_and_runtime_overrides() {
    let mut guard = EnvGuard::new();
    guard.set(ENV_TERMINAL_WIDTH, "120");
    guard.set(ENV_TERMINAL_HEIGHT, "40");
    guard.set(ENV_SHOW_COLOR, "TRUE");
    guard.set(ENV_PAGER, "less");
    guard.set(ENV_OUTPUT_DIR, "/tmp/toolcall-out");
    guard.set(ENV_SESSION_ID, "session-1");

    let config = EnvLoader::new().load_runtime_config();
    assert_eq!(config.shell.terminal_width, Some(120));
    assert_eq!(config.shell.terminal_height, Some(40));
    assert!(config.shell.show_color);
    assert_eq!(config.shell.pager, "less");
    assert_eq!(config.output_dir, PathBuf::from("/tmp/toolcall-out"));
    assert_eq!(config.session_id, "session-1");
}
