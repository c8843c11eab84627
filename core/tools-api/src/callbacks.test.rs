use super::*;
use pretty_assertions::assert_eq;
use std::sync::Mutex;

#[test]
fn test_closure_sink() {
    let seen = Mutex::new(Vec::new());
    let sink = |call_id: &str, chunk: LiveOutput| {
        seen.lock().unwrap().push((call_id.to_string(), chunk));
    };
    sink.on_output("call-1", LiveOutput::Text("hi".to_string()));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![("call-1".to_string(), LiveOutput::Text("hi".to_string()))]
    );
}

#[test]
fn test_channel_sink_delivers_in_order() {
    let (sink, mut rx) = ChannelOutputSink::channel();
    sink.on_output("c", LiveOutput::Text("a".to_string()));
    sink.on_output("c", LiveOutput::Lines(vec!["b".to_string()]));

    let first = rx.try_recv().unwrap();
    assert_eq!(first.call_id, "c");
    assert_eq!(first.chunk, LiveOutput::Text("a".to_string()));
    assert_eq!(
        rx.try_recv().unwrap().chunk,
        LiveOutput::Lines(vec!["b".to_string()])
    );
}

#[test]
fn test_channel_sink_closed_receiver() {
    let (sink, rx) = ChannelOutputSink::channel();
    drop(rx);
    sink.on_output("c", LiveOutput::Text("lost".to_string()));
}
