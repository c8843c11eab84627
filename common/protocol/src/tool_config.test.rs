use super::*;

#[test]
fn test_tool_config_default() {
    let config = ToolConfig::default();
    assert!(config.enable_output_truncation);
    assert_eq!(config.truncate_output_threshold, DEFAULT_TRUNCATE_OUTPUT_THRESHOLD);
    assert_eq!(config.truncate_output_lines, DEFAULT_TRUNCATE_OUTPUT_LINES);
    assert_eq!(config.truncation_limits(), Some((400_000, 1_000)));
}

#[test]
fn test_tool_config_serde_defaults() {
    let config: ToolConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ToolConfig::default());
}

#[test]
fn test_tool_config_partial() {
    let json = r#"{"truncate_output_threshold": 500, "truncate_output_lines": 5}"#;
    let config: ToolConfig = serde_json::from_str(json).unwrap();
    assert!(config.enable_output_truncation);
    assert_eq!(config.truncation_limits(), Some((500, 5)));
}

#[test]
fn test_non_positive_limits_disable_truncation() {
    for (threshold, lines) in [(0, 10), (10, 0), (-1, 10), (10, -5)] {
        let config = ToolConfig {
            enable_output_truncation: true,
            truncate_output_threshold: threshold,
            truncate_output_lines: lines,
        };
        assert_eq!(config.truncation_limits(), None, "{threshold}/{lines}");
    }
}

#[test]
fn test_switch_disables_truncation() {
    let config = ToolConfig {
        enable_output_truncation: false,
        ..ToolConfig::default()
    };
    assert_eq!(config.truncation_limits(), None);
}
