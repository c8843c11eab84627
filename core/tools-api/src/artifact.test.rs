use super::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_sanitize_file_component() {
    assert_eq!(sanitize_file_component("run_shell-command.v2"), "run_shell-command.v2");
    assert_eq!(sanitize_file_component("mcp/server:tool"), "mcp_server_tool");
    assert_eq!(sanitize_file_component("../../etc"), ".._.._etc");
    assert_eq!(sanitize_file_component(".."), "__");
    assert_eq!(sanitize_file_component("é"), "_");
}

#[test]
fn test_artifact_path_layout() {
    let path = FsArtifactStore::artifact_path(Path::new("/out"), "shell", "call/1");
    assert_eq!(path, PathBuf::from("/out/tool-outputs/shell_call_1.txt"));
}

#[tokio::test]
async fn test_save_writes_full_content() {
    let dir = TempDir::new().unwrap();
    let content = "x".repeat(10_000);

    let path = FsArtifactStore::new()
        .save(&content, "shell", "call-1", dir.path())
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("tool-outputs").join("shell_call-1.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

#[tokio::test]
async fn test_save_fails_when_dir_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = FsArtifactStore::new()
        .save("content", "shell", "call-1", &blocker)
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Io { .. }));
}
