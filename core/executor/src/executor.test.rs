use super::*;
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;
use tempfile::TempDir;
use toolcall_protocol::LiveOutputUpdate;
use toolcall_protocol::ToolCallRequest;
use toolcall_protocol::ToolCallStatus;
use toolcall_protocol::ToolConfig;
use toolcall_protocol::ToolErrorKind;
use toolcall_tools_api::ChannelOutputSink;
use toolcall_tools_api::HookResult;
use toolcall_tools_api::InvocationContext;
use toolcall_tools_api::ToolHook;
use toolcall_tools_api::ToolInvocation;
use toolcall_tools_api::ToolOutputTruncatedEvent;
use toolcall_tools_api::ToolSpec;

const CANCELLED_TEXT: &str = "[Operation Cancelled] User cancelled tool execution.";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Invocation that replays a fixed script.
struct ScriptedInvocation {
    params: Value,
    outcome: Mutex<Option<Result<ToolResult, ToolError>>>,
    chunks: Vec<LiveOutput>,
    pid: Option<u32>,
    cancel_before_settling: Option<CancellationToken>,
    panic_with: Option<&'static str>,
}

impl ScriptedInvocation {
    fn settling(outcome: Result<ToolResult, ToolError>) -> Self {
        Self {
            params: serde_json::json!({"command": "ls"}),
            outcome: Mutex::new(Some(outcome)),
            chunks: Vec::new(),
            pid: None,
            cancel_before_settling: None,
            panic_with: None,
        }
    }

    fn ok(text: &str) -> Self {
        Self::settling(Ok(ToolResult::text(text)))
    }

    fn with_chunks(mut self, chunks: Vec<LiveOutput>) -> Self {
        self.chunks = chunks;
        self
    }

    fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    fn cancelling(mut self, token: &CancellationToken) -> Self {
        self.cancel_before_settling = Some(token.clone());
        self
    }

    fn panicking(mut self, message: &'static str) -> Self {
        self.panic_with = Some(message);
        self
    }
}

#[async_trait]
impl ToolInvocation for ScriptedInvocation {
    fn params(&self) -> &Value {
        &self.params
    }

    fn description(&self) -> String {
        "scripted".to_string()
    }

    fn exposes_process_id(&self) -> bool {
        self.pid.is_some()
    }

    async fn execute(&self, ctx: InvocationContext) -> Result<ToolResult, ToolError> {
        for chunk in &self.chunks {
            ctx.emit_output(chunk.clone());
        }
        if let Some(pid) = self.pid {
            ctx.report_process_id(pid);
            ctx.report_process_id(pid);
        }
        if let Some(token) = &self.cancel_before_settling {
            token.cancel();
        }
        if let Some(message) = self.panic_with {
            panic!("{message}");
        }
        tokio::task::yield_now().await;
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(ToolResult::text("")))
    }
}

/// Invocation that hands its context to a background task and returns
/// before the task reports a process id.
struct DetachedPidInvocation {
    params: Value,
    reporter: Mutex<Option<tokio::task::JoinHandle<()>>>,
}

impl DetachedPidInvocation {
    fn new() -> Self {
        Self {
            params: serde_json::json!({"command": "sleep 1 &"}),
            reporter: Mutex::new(None),
        }
    }

    fn take_reporter(&self) -> Option<tokio::task::JoinHandle<()>> {
        self.reporter.lock().unwrap().take()
    }
}

#[async_trait]
impl ToolInvocation for DetachedPidInvocation {
    fn params(&self) -> &Value {
        &self.params
    }

    fn description(&self) -> String {
        "detached".to_string()
    }

    fn exposes_process_id(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: InvocationContext) -> Result<ToolResult, ToolError> {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            ctx.report_process_id(77);
        });
        *self.reporter.lock().unwrap() = Some(handle);
        Ok(ToolResult::text("started"))
    }
}

/// Invocation that streams chunks from a spawned task, suspending between
/// each one, and settles after the task finishes.
struct StreamingInvocation {
    params: Value,
    chunks: Vec<String>,
}

#[async_trait]
impl ToolInvocation for StreamingInvocation {
    fn params(&self) -> &Value {
        &self.params
    }

    fn description(&self) -> String {
        "streaming".to_string()
    }

    async fn execute(&self, ctx: InvocationContext) -> Result<ToolResult, ToolError> {
        let chunks = self.chunks.clone();
        let producer = tokio::spawn(async move {
            for (i, chunk) in chunks.into_iter().enumerate() {
                if i % 2 == 0 {
                    tokio::task::yield_now().await;
                } else {
                    tokio::time::sleep(Duration::from_millis(2)).await;
                }
                ctx.emit_output(LiveOutput::Text(chunk));
            }
        });
        producer
            .await
            .map_err(|err| ToolError::internal(err.to_string()))?;
        Ok(ToolResult::text("streamed"))
    }
}

#[derive(Default)]
struct RecordingTelemetry {
    events: Mutex<Vec<ToolOutputTruncatedEvent>>,
}

impl TelemetrySink for RecordingTelemetry {
    fn record_output_truncated(&self, event: &ToolOutputTruncatedEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

struct FailingStore;

#[async_trait]
impl ArtifactStore for FailingStore {
    async fn save(&self, _: &str, _: &str, _: &str, _: &Path) -> Result<PathBuf, ToolError> {
        Err(ToolError::internal("disk full"))
    }
}

struct PanickingSink;

impl LiveOutputSink for PanickingSink {
    fn on_output(&self, _call_id: &str, _chunk: LiveOutput) {
        panic!("sink exploded");
    }
}

struct DenyHook;

#[async_trait]
impl ToolHook for DenyHook {
    fn name(&self) -> &str {
        "deny"
    }

    async fn before_tool(&self, _tool_name: &str, _params: &Value) -> HookResult {
        HookResult::Reject {
            reason: "Shell commands are disabled".to_string(),
        }
    }
}

fn request() -> ToolCallRequest {
    ToolCallRequest::new(
        "call-1",
        "run_shell_command",
        serde_json::json!({"command": "ls"}),
        "prompt-1",
    )
}

fn pending_with_invocation(invocation: Arc<dyn ToolInvocation>, tool: ToolSpec) -> ToolCall {
    ToolCall::Pending(
        CallInfo::new(request())
            .with_tool(Arc::new(tool))
            .with_invocation(invocation)
            .started_now(),
    )
}

fn pending_with(invocation: ScriptedInvocation, tool: ToolSpec) -> ToolCall {
    pending_with_invocation(Arc::new(invocation), tool)
}

fn pending(invocation: ScriptedInvocation) -> ToolCall {
    pending_with(invocation, ToolSpec::new("run_shell_command"))
}

fn config(dir: &TempDir) -> RuntimeConfig {
    RuntimeConfig {
        output_dir: dir.path().to_path_buf(),
        model: "gemini-2.5-pro".to_string(),
        ..RuntimeConfig::default()
    }
}

fn noop_notifier() -> Arc<dyn CallStateNotifier> {
    Arc::new(|_: &ToolCall| {})
}

fn recording_notifier() -> (Arc<dyn CallStateNotifier>, Arc<Mutex<Vec<ToolCall>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let notifier: Arc<dyn CallStateNotifier> = {
        let seen = Arc::clone(&seen);
        Arc::new(move |call: &ToolCall| seen.lock().unwrap().push(call.clone()))
    };
    (notifier, seen)
}

async fn run(
    executor: &ToolExecutor,
    call: ToolCall,
    token: &CancellationToken,
    config: &RuntimeConfig,
) -> CompletedToolCall {
    executor
        .execute(call, token, None, noop_notifier(), config)
        .await
        .unwrap()
}

fn function_output(done: &CompletedToolCall) -> Value {
    done.response().response_parts[0]
        .as_function_response()
        .unwrap()
        .response
        .clone()
}

#[tokio::test]
async fn test_success() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let invocation = ScriptedInvocation::settling(Ok(
        ToolResult::text("file_a\nfile_b").with_display("2 files")
    ));

    let done = run(
        &ToolExecutor::default(),
        pending(invocation),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Success);
    assert_eq!(function_output(&done), serde_json::json!({"output": "file_a\nfile_b"}));
    assert_eq!(done.response().result_display.as_deref(), Some("2 files"));
    assert_eq!(done.response().content_length, Some(13));
    assert_eq!(done.response().output_file, None);
    assert_eq!(done.response().error, None);
    assert!(done.duration().is_some());
}

#[tokio::test]
async fn test_duration_absent_without_start_time() {
    let dir = TempDir::new().unwrap();
    let call = ToolCall::Pending(
        CallInfo::new(request())
            .with_tool(Arc::new(ToolSpec::new("run_shell_command")))
            .with_invocation(Arc::new(ScriptedInvocation::ok("x"))),
    );

    let done = run(&ToolExecutor::default(), call, &CancellationToken::new(), &config(&dir)).await;

    assert_eq!(done.status(), ToolCallStatus::Success);
    assert_eq!(done.duration(), None);
}

#[tokio::test]
async fn test_duration_measured_from_recorded_start() {
    let dir = TempDir::new().unwrap();
    let start = Instant::now() - Duration::from_millis(20);
    let call = ToolCall::Pending(
        CallInfo::new(request())
            .with_tool(Arc::new(ToolSpec::new("run_shell_command")))
            .with_invocation(Arc::new(ScriptedInvocation::ok("x")))
            .with_start_time(start),
    );

    let done = run(&ToolExecutor::default(), call, &CancellationToken::new(), &config(&dir)).await;

    assert!(done.duration().unwrap() >= Duration::from_millis(20));
    assert_eq!(done.info().start_time, Some(start));
}

#[tokio::test]
async fn test_result_error_descriptor() {
    let dir = TempDir::new().unwrap();
    let invocation = ScriptedInvocation::settling(Ok(ToolResult::error(
        "Command exited with code 1",
        ToolErrorKind::ShellExecuteError,
    )
    .with_display("ls failed")));

    let done = run(
        &ToolExecutor::default(),
        pending(invocation),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Error);
    assert_eq!(done.response().function_error(), Some("Command exited with code 1"));
    assert_eq!(done.response().error.as_deref(), Some("Command exited with code 1"));
    assert_eq!(done.response().result_display.as_deref(), Some("ls failed"));
    assert_eq!(done.response().error_kind, Some(ToolErrorKind::ShellExecuteError));
    assert_eq!(done.response().content_length, Some("Command exited with code 1".len()));
}

#[tokio::test]
async fn test_structured_fault_keeps_display_out_of_error_field() {
    let dir = TempDir::new().unwrap();
    let invocation = ScriptedInvocation::settling(Err(ToolError::structured(
        "params/command must be a string",
        "Invalid command",
        ToolErrorKind::InvalidToolParams,
    )));

    let done = run(
        &ToolExecutor::default(),
        pending(invocation),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Error);
    let response = done.response();
    assert_eq!(response.error.as_deref(), Some("params/command must be a string"));
    assert_eq!(response.function_error(), Some("params/command must be a string"));
    assert_eq!(response.result_display.as_deref(), Some("Invalid command"));
    assert_eq!(response.error_kind, Some(ToolErrorKind::InvalidToolParams));
}

#[tokio::test]
async fn test_unhandled_fault() {
    let dir = TempDir::new().unwrap();
    let invocation = ScriptedInvocation::settling(Err(ToolError::internal("broken pipe")));

    let done = run(
        &ToolExecutor::default(),
        pending(invocation),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Error);
    assert_eq!(done.response().error.as_deref(), Some("broken pipe"));
    assert_eq!(done.response().result_display.as_deref(), Some("broken pipe"));
    assert_eq!(done.response().error_kind, Some(ToolErrorKind::Unhandled));
}

#[tokio::test]
async fn test_panicking_invocation_becomes_error() {
    let dir = TempDir::new().unwrap();
    let invocation = ScriptedInvocation::ok("never").panicking("invocation blew up");

    let done = run(
        &ToolExecutor::default(),
        pending(invocation),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Error);
    assert_eq!(done.response().error.as_deref(), Some("invocation blew up"));
    assert_eq!(done.response().error_kind, Some(ToolErrorKind::Unhandled));
}

#[tokio::test]
async fn test_cancellation_overrides_fault() {
    let dir = TempDir::new().unwrap();
    let token = CancellationToken::new();
    token.cancel();
    let invocation = ScriptedInvocation::settling(Err(ToolError::internal("killed")));

    let done = run(&ToolExecutor::default(), pending(invocation), &token, &config(&dir)).await;

    assert_eq!(done.status(), ToolCallStatus::Cancelled);
    assert_eq!(done.response().function_error(), Some(CANCELLED_TEXT));
    assert_eq!(done.response().error, None);
    assert_eq!(done.response().error_kind, None);
    assert_eq!(done.response().content_length, Some(CANCELLED_TEXT.len()));
}

#[tokio::test]
async fn test_cancellation_overrides_success_and_error_results() {
    let dir = TempDir::new().unwrap();
    for outcome in [
        Ok(ToolResult::text("done")),
        Ok(ToolResult::error("failed", ToolErrorKind::ExecutionFailed)),
    ] {
        let token = CancellationToken::new();
        // Cancelled after the invocation has produced its result.
        let invocation = ScriptedInvocation::settling(outcome).cancelling(&token);

        let done = run(&ToolExecutor::default(), pending(invocation), &token, &config(&dir)).await;

        assert_eq!(done.status(), ToolCallStatus::Cancelled);
        assert_eq!(done.response().function_error(), Some(CANCELLED_TEXT));
    }
}

#[tokio::test]
async fn test_cancellation_after_return_has_no_effect() {
    let dir = TempDir::new().unwrap();
    let token = CancellationToken::new();

    let done = run(
        &ToolExecutor::default(),
        pending(ScriptedInvocation::ok("ok")),
        &token,
        &config(&dir),
    )
    .await;
    token.cancel();

    assert_eq!(done.status(), ToolCallStatus::Success);
}

#[tokio::test]
async fn test_process_id_transitions_to_executing_once() {
    let dir = TempDir::new().unwrap();
    let start = Instant::now();
    let call = ToolCall::Pending(
        CallInfo::new(request())
            .with_tool(Arc::new(ToolSpec::new("run_shell_command")))
            .with_invocation(Arc::new(ScriptedInvocation::ok("ok").with_pid(4242)))
            .with_start_time(start),
    );
    let (notifier, seen) = recording_notifier();

    let done = ToolExecutor::default()
        .execute(call, &CancellationToken::new(), None, notifier, &config(&dir))
        .await
        .unwrap();

    assert_eq!(done.status(), ToolCallStatus::Success);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].status(), ToolCallStatus::Executing);
    assert_eq!(seen[0].pid(), Some(4242));
    assert_eq!(seen[0].info().start_time, Some(start));
    assert_eq!(seen[0].call_id(), "call-1");
}

#[tokio::test]
async fn test_no_process_callback_without_capability() {
    let dir = TempDir::new().unwrap();
    let (notifier, seen) = recording_notifier();

    ToolExecutor::default()
        .execute(
            pending(ScriptedInvocation::ok("ok")),
            &CancellationToken::new(),
            None,
            notifier,
            &config(&dir),
        )
        .await
        .unwrap();

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_live_output_forwarded_with_call_id() {
    let dir = TempDir::new().unwrap();
    let (sink, mut rx) = ChannelOutputSink::channel();
    let invocation = ScriptedInvocation::ok("ok").with_chunks(vec![
        LiveOutput::Text("one".to_string()),
        LiveOutput::Lines(vec!["two".to_string()]),
    ]);
    let tool = ToolSpec::new("run_shell_command").with_live_output();

    ToolExecutor::default()
        .execute(
            pending_with(invocation, tool),
            &CancellationToken::new(),
            Some(Arc::new(sink)),
            noop_notifier(),
            &config(&dir),
        )
        .await
        .unwrap();

    let mut updates = Vec::new();
    while let Ok(update) = rx.try_recv() {
        updates.push(update);
    }
    assert_eq!(
        updates,
        vec![
            LiveOutputUpdate {
                call_id: "call-1".to_string(),
                chunk: LiveOutput::Text("one".to_string()),
            },
            LiveOutputUpdate {
                call_id: "call-1".to_string(),
                chunk: LiveOutput::Lines(vec!["two".to_string()]),
            },
        ]
    );
}

#[tokio::test]
async fn test_live_output_requires_capability() {
    let dir = TempDir::new().unwrap();
    let (sink, mut rx) = ChannelOutputSink::channel();
    let invocation =
        ScriptedInvocation::ok("ok").with_chunks(vec![LiveOutput::Text("one".to_string())]);

    ToolExecutor::default()
        .execute(
            pending(invocation),
            &CancellationToken::new(),
            Some(Arc::new(sink)),
            noop_notifier(),
            &config(&dir),
        )
        .await
        .unwrap();

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_panicking_sink_does_not_abort_call() {
    let dir = TempDir::new().unwrap();
    let sink: Arc<dyn LiveOutputSink> = Arc::new(PanickingSink);
    let invocation = ScriptedInvocation::ok("finished").with_chunks(vec![
        LiveOutput::Text("a".to_string()),
        LiveOutput::Text("b".to_string()),
    ]);
    let tool = ToolSpec::new("run_shell_command").with_live_output();

    let done = ToolExecutor::default()
        .execute(
            pending_with(invocation, tool),
            &CancellationToken::new(),
            Some(sink),
            noop_notifier(),
            &config(&dir),
        )
        .await
        .unwrap();

    assert_eq!(done.status(), ToolCallStatus::Success);
    assert_eq!(function_output(&done), serde_json::json!({"output": "finished"}));
}

#[tokio::test]
async fn test_oversized_output_is_truncated() {
    let dir = TempDir::new().unwrap();
    let telemetry = Arc::new(RecordingTelemetry::default());
    let executor = ToolExecutor::default().with_telemetry(telemetry.clone());
    let mut config = config(&dir);
    config.tool = ToolConfig {
        enable_output_truncation: true,
        truncate_output_threshold: 500,
        truncate_output_lines: 5,
    };
    let content = "a".repeat(1000);

    let done = run(
        &executor,
        pending(ScriptedInvocation::ok(&content)),
        &CancellationToken::new(),
        &config,
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Success);
    let output_file = done.response().output_file.clone().unwrap();
    assert_eq!(std::fs::read_to_string(&output_file).unwrap(), content);
    let length = done.response().content_length.unwrap();
    assert!(length < 1000);

    let events = telemetry.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].original_content_length, 1000);
    assert_eq!(events[0].truncated_content_length, length);
}

#[tokio::test]
async fn test_zero_threshold_disables_truncation() {
    let dir = TempDir::new().unwrap();
    let mut config = config(&dir);
    config.tool.truncate_output_threshold = 0;
    let content = "q".repeat(10_000);

    let done = run(
        &ToolExecutor::default(),
        pending(ScriptedInvocation::ok(&content)),
        &CancellationToken::new(),
        &config,
    )
    .await;

    assert_eq!(done.response().output_file, None);
    assert_eq!(done.response().content_length, Some(10_000));
    assert_eq!(function_output(&done), serde_json::json!({"output": content}));
}

#[tokio::test]
async fn test_store_failure_keeps_full_output() {
    let dir = TempDir::new().unwrap();
    let executor = ToolExecutor::default().with_artifact_store(Arc::new(FailingStore));
    let mut config = config(&dir);
    config.tool.truncate_output_threshold = 10;
    let content = "r".repeat(100);

    let done = run(
        &executor,
        pending(ScriptedInvocation::ok(&content)),
        &CancellationToken::new(),
        &config,
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Success);
    assert_eq!(done.response().output_file, None);
    assert_eq!(done.response().content_length, Some(100));
}

#[tokio::test]
async fn test_pre_hook_rejection_is_policy_error() {
    let dir = TempDir::new().unwrap();
    let hooks = HookChain::new().with_hook(Arc::new(DenyHook));
    let executor = ToolExecutor::default().with_hooks(Arc::new(hooks));

    let done = run(
        &executor,
        pending(ScriptedInvocation::ok("ok")),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    assert_eq!(done.status(), ToolCallStatus::Error);
    assert_eq!(
        done.response().result_display.as_deref(),
        Some("Shell commands are disabled")
    );
    assert_eq!(done.response().error_kind, Some(ToolErrorKind::PolicyViolation));
}

#[tokio::test]
async fn test_missing_tool_is_precondition_violation() {
    let dir = TempDir::new().unwrap();
    let call = ToolCall::Pending(
        CallInfo::new(request()).with_invocation(Arc::new(ScriptedInvocation::ok("ok"))),
    );

    let err = ToolExecutor::default()
        .execute(call, &CancellationToken::new(), None, noop_notifier(), &config(&dir))
        .await
        .unwrap_err();

    assert!(matches!(err, ExecutorError::MissingTool { .. }));
    assert_eq!(
        toolcall_error::ErrorExt::status_code(&err),
        toolcall_error::StatusCode::PreconditionFailed
    );
}

#[tokio::test]
async fn test_missing_invocation_is_precondition_violation() {
    let dir = TempDir::new().unwrap();
    let call = ToolCall::Pending(
        CallInfo::new(request()).with_tool(Arc::new(ToolSpec::new("run_shell_command"))),
    );

    let err = ToolExecutor::default()
        .execute(call, &CancellationToken::new(), None, noop_notifier(), &config(&dir))
        .await
        .unwrap_err();

    assert!(matches!(err, ExecutorError::MissingInvocation { .. }));
}

#[tokio::test]
async fn test_non_pending_call_is_rejected() {
    let dir = TempDir::new().unwrap();
    let executor = ToolExecutor::default();
    let done = run(
        &executor,
        pending(ScriptedInvocation::ok("ok")),
        &CancellationToken::new(),
        &config(&dir),
    )
    .await;

    let err = executor
        .execute(done.into(), &CancellationToken::new(), None, noop_notifier(), &config(&dir))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Tool call call-1 is success, expected pending"
    );
}

#[tokio::test]
async fn test_process_id_after_settlement_is_dropped() {
    let dir = TempDir::new().unwrap();
    let invocation = Arc::new(DetachedPidInvocation::new());
    let call = ToolCall::Pending(
        CallInfo::new(request())
            .with_tool(Arc::new(ToolSpec::new("run_shell_command")))
            .with_invocation(invocation.clone())
            .started_now(),
    );
    let (notifier, seen) = recording_notifier();

    let done = ToolExecutor::default()
        .execute(call, &CancellationToken::new(), None, notifier, &config(&dir))
        .await
        .unwrap();
    invocation.take_reporter().unwrap().await.unwrap();

    assert_eq!(done.status(), ToolCallStatus::Success);
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_live_output_from_background_task_keeps_order() {
    let dir = TempDir::new().unwrap();
    let (sink, mut rx) = ChannelOutputSink::channel();
    let chunks: Vec<String> = (0..8).map(|i| format!("chunk-{i}")).collect();
    let invocation = StreamingInvocation {
        params: serde_json::json!({"command": "make"}),
        chunks: chunks.clone(),
    };
    let tool = ToolSpec::new("run_shell_command").with_live_output();

    let done = ToolExecutor::default()
        .execute(
            pending_with_invocation(Arc::new(invocation), tool),
            &CancellationToken::new(),
            Some(Arc::new(sink)),
            noop_notifier(),
            &config(&dir),
        )
        .await
        .unwrap();

    assert_eq!(done.status(), ToolCallStatus::Success);
    let mut received = Vec::new();
    while let Ok(update) = rx.try_recv() {
        assert_eq!(update.call_id, "call-1");
        received.push(update.chunk);
    }
    let expected: Vec<LiveOutput> = chunks.into_iter().map(LiveOutput::Text).collect();
    assert_eq!(received, expected);
}
