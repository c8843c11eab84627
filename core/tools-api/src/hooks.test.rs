use super::*;
use pretty_assertions::assert_eq;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use toolcall_protocol::LiveOutput;

struct EchoInvocation {
    params: Value,
    calls: AtomicUsize,
}

impl EchoInvocation {
    fn new() -> Self {
        Self {
            params: serde_json::json!({"text": "hello"}),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ToolInvocation for EchoInvocation {
    fn params(&self) -> &Value {
        &self.params
    }

    fn description(&self) -> String {
        "echo".to_string()
    }

    async fn execute(&self, ctx: InvocationContext) -> Result<ToolResult, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ctx.emit_output(LiveOutput::Text("partial".to_string()));
        ctx.report_process_id(7);
        Ok(ToolResult::text("hello"))
    }
}

struct RecordingHook {
    name: String,
    reject_before: bool,
    reject_after: bool,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ToolHook for RecordingHook {
    fn name(&self) -> &str {
        &self.name
    }

    async fn before_tool(&self, tool_name: &str, _params: &Value) -> HookResult {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:before:{tool_name}", self.name));
        if self.reject_before {
            HookResult::Reject {
                reason: "blocked by policy".to_string(),
            }
        } else {
            HookResult::Continue
        }
    }

    async fn after_tool(
        &self,
        tool_name: &str,
        result: &Result<ToolResult, ToolError>,
    ) -> HookResult {
        self.log.lock().unwrap().push(format!(
            "{}:after:{tool_name}:{}",
            self.name,
            result.is_ok()
        ));
        if self.reject_after {
            HookResult::Reject {
                reason: "too late".to_string(),
            }
        } else {
            HookResult::Continue
        }
    }
}

fn hook(
    name: &str,
    reject_before: bool,
    reject_after: bool,
    log: &Arc<Mutex<Vec<String>>>,
) -> Arc<dyn ToolHook> {
    Arc::new(RecordingHook {
        name: name.to_string(),
        reject_before,
        reject_after,
        log: Arc::clone(log),
    })
}

async fn run_chain(
    chain: &HookChain,
    invocation: &EchoInvocation,
    live_output: Option<LiveOutputFn>,
    on_process_id: Option<ProcessIdCallback>,
) -> Result<ToolResult, ToolError> {
    let token = CancellationToken::new();
    let tool = ToolSpec::new("echo");
    let config = RuntimeConfig::default();
    chain
        .run(HookedExecution {
            invocation,
            tool_name: "echo",
            call_id: "call-1",
            cancel_token: &token,
            tool: &tool,
            live_output,
            shell: &config.shell,
            on_process_id,
            config: &config,
        })
        .await
}

#[tokio::test]
async fn test_empty_chain_passthrough() {
    let invocation = EchoInvocation::new();
    let chunks = Arc::new(Mutex::new(Vec::new()));
    let pids = Arc::new(Mutex::new(Vec::new()));
    let live: LiveOutputFn = {
        let chunks = Arc::clone(&chunks);
        Arc::new(move |chunk: LiveOutput| chunks.lock().unwrap().push(chunk))
    };
    let on_pid: ProcessIdCallback = {
        let pids = Arc::clone(&pids);
        Arc::new(move |pid: u32| pids.lock().unwrap().push(pid))
    };

    let result = run_chain(&HookChain::new(), &invocation, Some(live), Some(on_pid))
        .await
        .unwrap();

    assert_eq!(result, ToolResult::text("hello"));
    assert_eq!(
        *chunks.lock().unwrap(),
        vec![LiveOutput::Text("partial".to_string())]
    );
    assert_eq!(*pids.lock().unwrap(), vec![7]);
}

#[tokio::test]
async fn test_hooks_run_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HookChain::new()
        .with_hook(hook("a", false, false, &log))
        .with_hook(hook("b", false, true, &log));
    let invocation = EchoInvocation::new();

    let result = run_chain(&chain, &invocation, None, None).await;

    assert!(result.is_ok());
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "a:before:echo",
            "b:before:echo",
            "a:after:echo:true",
            "b:after:echo:true",
        ]
    );
}

#[tokio::test]
async fn test_pre_hook_rejection_is_structured() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HookChain::new()
        .with_hook(hook("guard", true, false, &log))
        .with_hook(hook("never", false, false, &log));
    let invocation = EchoInvocation::new();

    let err = run_chain(&chain, &invocation, None, None).await.unwrap_err();

    let (message, display, kind) = err.as_structured().unwrap();
    assert_eq!(display, "blocked by policy");
    assert!(message.contains("guard"));
    assert_eq!(kind, ToolErrorKind::PolicyViolation);
    assert_eq!(invocation.calls.load(Ordering::SeqCst), 0);
    assert_eq!(*log.lock().unwrap(), vec!["guard:before:echo"]);
}

#[test]
fn test_chain_debug_lists_hooks() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HookChain::new().with_hook(hook("audit", false, false, &log));
    assert_eq!(chain.len(), 1);
    assert_eq!(format!("{chain:?}"), r#"["audit"]"#);
}
