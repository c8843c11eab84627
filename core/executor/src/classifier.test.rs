use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_structured_fault_passes_through() {
    let fault = ToolError::structured(
        "ENOENT: /tmp/missing.txt",
        "File not found: missing.txt",
        ToolErrorKind::FileNotFound,
    );
    assert_eq!(
        classify_fault(&fault),
        ClassifiedError {
            message: "ENOENT: /tmp/missing.txt".to_string(),
            display: "File not found: missing.txt".to_string(),
            kind: ToolErrorKind::FileNotFound,
        }
    );
}

#[test]
fn test_unstructured_fault_is_unhandled() {
    let classified = classify_fault(&ToolError::internal("connection reset"));
    assert_eq!(classified, ClassifiedError::unhandled("connection reset"));
    assert_eq!(classified.display, classified.message);
    assert_eq!(classified.kind, ToolErrorKind::Unhandled);

    let io: ToolError = std::io::Error::other("disk full").into();
    assert_eq!(classify_fault(&io).message, "IO error: disk full");
}

#[test]
fn test_result_error_uses_return_display() {
    let error = ToolResultError {
        message: "exit status 2".to_string(),
        kind: ToolErrorKind::ShellExecuteError,
    };
    let classified = classify_result_error(&error, Some("Command failed"));
    assert_eq!(classified.message, "exit status 2");
    assert_eq!(classified.display, "Command failed");
    assert_eq!(classified.kind, ToolErrorKind::ShellExecuteError);

    let classified = classify_result_error(&error, None);
    assert_eq!(classified.display, "exit status 2");
}

#[test]
fn test_panic_payloads() {
    assert_eq!(classify_panic(Box::new("static message")).message, "static message");
    assert_eq!(
        classify_panic(Box::new(String::from("owned message"))).message,
        "owned message"
    );
    assert_eq!(
        classify_panic(Box::new(42_u8)),
        ClassifiedError::unhandled("Tool invocation panicked")
    );
}
