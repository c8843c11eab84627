use super::*;
use strum::IntoEnumIterator;

#[test]
fn test_status_code_values() {
    assert_eq!(StatusCode::Success as i32, 00_000);
    assert_eq!(StatusCode::Unknown as i32, 01_000);
    assert_eq!(StatusCode::PreconditionFailed as i32, 01_005);
    assert_eq!(StatusCode::InvalidArguments as i32, 02_000);
    assert_eq!(StatusCode::IoError as i32, 03_000);
    assert_eq!(StatusCode::PermissionDenied as i32, 05_001);
    assert_eq!(StatusCode::InvalidConfig as i32, 10_000);
    assert_eq!(StatusCode::Timeout as i32, 12_003);
    assert_eq!(StatusCode::ToolNotFound as i32, 13_000);
}

#[test]
fn test_is_success() {
    assert!(StatusCode::is_success(0));
    assert!(!StatusCode::is_success(01_000));
}

#[test]
fn test_is_retryable() {
    assert!(StatusCode::Timeout.is_retryable());
    assert!(StatusCode::McpToolFailed.is_retryable());
    assert!(!StatusCode::Cancelled.is_retryable());
    assert!(!StatusCode::PreconditionFailed.is_retryable());
    assert!(!StatusCode::InvalidArguments.is_retryable());
}

#[test]
fn test_should_log_error() {
    assert!(StatusCode::Internal.should_log_error());
    assert!(StatusCode::PreconditionFailed.should_log_error());
    assert!(!StatusCode::PolicyViolation.should_log_error());
}

#[test]
fn test_category() {
    assert_eq!(StatusCode::Cancelled.category(), StatusCategory::Common);
    assert_eq!(StatusCode::ParseError.category(), StatusCategory::Input);
    assert_eq!(StatusCode::FileNotFound.category(), StatusCategory::IO);
    assert_eq!(StatusCode::PolicyViolation.category(), StatusCategory::Auth);
    assert_eq!(StatusCode::ShellExecutionFailed.category(), StatusCategory::Tool);
}

#[test]
fn test_from_i32_round_trips_every_code() {
    for code in StatusCode::iter() {
        assert_eq!(StatusCode::from_i32(code as i32), Some(code));
    }
    assert_eq!(StatusCode::from_i32(99_999), None);
}

#[test]
fn test_category_matches_code_prefix() {
    for code in StatusCode::iter() {
        let prefix = code as i32 / 1000;
        let expected = match prefix {
            0 => StatusCategory::Success,
            1 => StatusCategory::Common,
            2 => StatusCategory::Input,
            3 => StatusCategory::IO,
            5 => StatusCategory::Auth,
            10 => StatusCategory::Config,
            12 => StatusCategory::Resource,
            13 => StatusCategory::Tool,
            other => panic!("unexpected prefix {other} for {code}"),
        };
        assert_eq!(code.category(), expected, "{code}");
    }
}

#[test]
fn test_display_and_name() {
    assert_eq!(format!("{}", StatusCode::Success), "Success");
    assert_eq!(StatusCode::ToolNotFound.name(), "ToolNotFound");
    assert_eq!(StatusCode::PolicyViolation.as_ref(), "PolicyViolation");
}
