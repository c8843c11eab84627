use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_structured_parts() {
    let err = ToolError::structured(
        "params.path must be absolute",
        "Path must be absolute",
        ToolErrorKind::InvalidToolParams,
    );
    assert_eq!(err.to_string(), "params.path must be absolute");
    assert_eq!(
        err.as_structured(),
        Some((
            "params.path must be absolute",
            "Path must be absolute",
            ToolErrorKind::InvalidToolParams
        ))
    );
    assert_eq!(err.status_code(), StatusCode::InvalidArguments);
}

#[test]
fn test_unstructured_variants() {
    let io: ToolError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(io.as_structured().is_none());
    assert_eq!(io.to_string(), "IO error: gone");
    assert_eq!(io.status_code(), StatusCode::IoError);

    let internal = ToolError::internal("socket closed");
    assert_eq!(internal.to_string(), "socket closed");
    assert_eq!(internal.status_code(), StatusCode::Internal);
    assert_eq!(internal.output_msg(), "Internal error: 1001");

    let other = ToolError::other("backend exploded");
    assert_eq!(other.to_string(), "backend exploded");
    assert_eq!(other.status_code(), StatusCode::ToolExecutionFailed);
}

#[test]
fn test_json_error() {
    let err: ToolError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(err.to_string().starts_with("JSON error:"));
    assert_eq!(err.status_code(), StatusCode::InvalidJson);
}
