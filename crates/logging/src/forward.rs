//! Forward tracing events to the editor host.
//!
//! This module provides a small tracing [`Layer`] that forwards log events to
//! the host as [`MsgToHost::Log`] when a sink is set. Hosts that speak the line
//! protocol see page logs interleaved with the rest of the page's output.
//!
//! Usage:
//! - Call [`set_sink`] with the page's [`HostTx`] once a host is attached.
//! - Install the [`layer`] in your tracing subscriber.
//! - Call [`clear_sink`] when the host goes away.
//!
//! The layer no-ops when no sink is set.

use std::sync::OnceLock;

use clinic_protocol::{MsgToHost, ipc::HostTx};
use parking_lot::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fmt;

/// A global sink that, when present, forwards page logs to the host.
static LOG_SINK: OnceLock<Mutex<Option<HostTx>>> = OnceLock::new();

/// Access the global sink.
fn sink() -> &'static Mutex<Option<HostTx>> {
    LOG_SINK.get_or_init(|| Mutex::new(None))
}

/// Set the forwarding sink (called when a host attaches).
pub fn set_sink(tx: HostTx) {
    let mut guard = sink().lock();
    *guard = Some(tx);
}

/// Clear the forwarding sink (called when the host goes away).
pub fn clear_sink() {
    let mut guard = sink().lock();
    *guard = None;
}

/// Tracing layer that forwards events to the host when a sink is set.
pub struct ForwardLayer;

impl<S> Layer<S> for ForwardLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let tx_opt = { sink().lock().clone() };
        let Some(tx) = tx_opt else { return };

        let r = fmt::render_event(event);
        let msg = MsgToHost::Log {
            level: r.level,
            target: r.target,
            message: r.message,
        };
        if tx.send(msg).is_err() {
            // Host receiver dropped.
            clear_sink();
        }
    }
}

/// Create the forwarding layer instance to add to your subscriber.
pub fn layer() -> ForwardLayer {
    ForwardLayer
}
