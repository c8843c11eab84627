use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_runtime_config_from_json() {
    let json = r#"{
        "tool": {"truncate_output_lines": 50},
        "shell": {"show_color": true},
        "model": "gemini-2.5-pro",
        "output_dir": "/tmp/out"
    }"#;
    let config: RuntimeConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.tool.truncate_output_lines, 50);
    assert_eq!(config.tool.truncate_output_threshold, 400_000);
    assert!(config.shell.show_color);
    assert_eq!(config.shell.pager, "cat");
    assert_eq!(config.model, "gemini-2.5-pro");
    assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(config.session_id, "");
}

#[test]
fn test_runtime_config_empty() {
    let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, RuntimeConfig::default());
}
