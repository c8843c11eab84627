use super::*;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tempfile::TempDir;
use toolcall_error::ErrorExt;
use toolcall_error::StatusCode;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::from_path(dir.path())
        .without_env()
        .load()
        .unwrap();
    assert_eq!(config.tool, toolcall_protocol::ToolConfig::default());
    assert_eq!(config.output_dir, dir.path().join(DEFAULT_OUTPUT_DIR_NAME));
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "  \n").unwrap();
    let config = ConfigLoader::from_path(dir.path())
        .without_env()
        .load()
        .unwrap();
    assert_eq!(config.model, "");
}

#[test]
fn test_load_file_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{
            "tool": {"truncate_output_threshold": 500, "truncate_output_lines": 5},
            "model": "gemini-2.5-flash",
            "output_dir": "/var/tmp/tool-out"
        }"#,
    )
    .unwrap();

    let config = ConfigLoader::from_path(dir.path())
        .without_env()
        .load()
        .unwrap();
    assert_eq!(config.tool.truncation_limits(), Some((500, 5)));
    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.output_dir, PathBuf::from("/var/tmp/tool-out"));
}

#[test]
fn test_invalid_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
    let err = ConfigLoader::from_path(dir.path())
        .without_env()
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::JsonParse { .. }));
    assert_eq!(err.status_code(), StatusCode::ConfigFileError);
}

#[test]
fn test_empty_pager_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), r#"{"shell": {"pager": ""}}"#).unwrap();
    let err = ConfigLoader::from_path(dir.path())
        .without_env()
        .load()
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::InvalidConfig);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        r#"{"tool": {"truncate_output_lines": 5}}"#,
    )
    .unwrap();

    // SAFETY: tests touching the environment are serialized
    unsafe { std::env::set_var(crate::env_loader::ENV_TRUNCATE_OUTPUT_LINES, "9") };
    let result = ConfigLoader::from_path(dir.path()).load();
    // SAFETY: see above
    unsafe { std::env::remove_var(crate::env_loader::ENV_TRUNCATE_OUTPUT_LINES) };

    assert_eq!(result.unwrap().tool.truncate_output_lines, 9);
}

#[test]
#[serial]
fn test_find_toolcall_home_from_env() {
    let dir = TempDir::new().unwrap();
    // SAFETY: tests touching the environment are serialized
    unsafe { std::env::set_var(TOOLCALL_HOME_ENV, dir.path()) };
    let home = find_toolcall_home();
    // SAFETY: see above
    unsafe { std::env::remove_var(TOOLCALL_HOME_ENV) };

    assert_eq!(home, dir.path());
}
