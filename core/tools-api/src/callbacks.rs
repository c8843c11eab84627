//! Caller-supplied callbacks for observing a call in flight.

use tokio::sync::mpsc;
use toolcall_protocol::LiveOutput;
use toolcall_protocol::LiveOutputUpdate;
use tracing::debug;

use crate::call::ToolCall;

/// Receives live output chunks, tagged with the call they belong to.
pub trait LiveOutputSink: Send + Sync {
    fn on_output(&self, call_id: &str, chunk: LiveOutput);
}

impl<F> LiveOutputSink for F
where
    F: Fn(&str, LiveOutput) + Send + Sync,
{
    fn on_output(&self, call_id: &str, chunk: LiveOutput) {
        self(call_id, chunk)
    }
}

/// Forwards live output into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelOutputSink {
    tx: mpsc::UnboundedSender<LiveOutputUpdate>,
}

impl ChannelOutputSink {
    pub fn new(tx: mpsc::UnboundedSender<LiveOutputUpdate>) -> Self {
        Self { tx }
    }

    /// Create a sink together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LiveOutputUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl LiveOutputSink for ChannelOutputSink {
    fn on_output(&self, call_id: &str, chunk: LiveOutput) {
        let update = LiveOutputUpdate {
            call_id: call_id.to_string(),
            chunk,
        };
        if self.tx.send(update).is_err() {
            debug!(call_id, "Live output receiver dropped");
        }
    }
}

/// Observes state transitions the executor makes on its own.
pub trait CallStateNotifier: Send + Sync {
    fn notify(&self, call: &ToolCall);
}

impl<F> CallStateNotifier for F
where
    F: Fn(&ToolCall) + Send + Sync,
{
    fn notify(&self, call: &ToolCall) {
        self(call)
    }
}

#[cfg(test)]
#[path = "callbacks.test.rs"]
mod tests;
