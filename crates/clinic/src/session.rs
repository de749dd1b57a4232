//! Line-protocol session: the page talks to a host over stdin/stdout.
//!
//! Each stdin line is a JSON [`MsgToPage`]; each stdout line is a JSON
//! [`MsgToHost`]. Snapshots go to the page; capability and edit-panel
//! requests are answered on stdout from the page's registered surface. End of
//! input shuts the page down.

use std::sync::Arc;

use clinic_engine::{
    ChannelHost, Error, HostSdk, MemoryDocument, MemoryPreferences, Page, PageOptions, Result,
};
use clinic_protocol::{
    MsgToPage,
    ipc::{codec, host_channel},
};
use logging::forward;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Forward page logs to the host as `log` messages.
    pub forward_logs: bool,
    /// Treat falsy values as unset.
    pub falsy_as_unset: bool,
}

/// Run a session until stdin closes or the host sends `shutdown`.
pub async fn run(opts: SessionOptions) -> Result<()> {
    let (host_tx, mut host_rx) = host_channel();
    if opts.forward_logs {
        forward::set_sink(host_tx.clone());
    }

    let writer = tokio::spawn(async move {
        let mut out = io::stdout();
        while let Some(msg) = host_rx.recv().await {
            let mut line = codec::encode_line(&msg)?;
            line.push('\n');
            out.write_all(line.as_bytes()).await?;
            out.flush().await?;
        }
        Ok::<(), Error>(())
    });

    let host = Arc::new(ChannelHost::new(host_tx));
    let sdk: Arc<dyn HostSdk> = host.clone();
    let page = Page::start(
        MemoryDocument::clinic_page(),
        Some(sdk),
        Box::new(MemoryPreferences::new()),
        PageOptions {
            falsy_as_unset: opts.falsy_as_unset,
            rotation: None,
            ..PageOptions::default()
        },
    );
    let page_task = tokio::spawn(page.run());
    info!("session_started");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match codec::decode_line::<MsgToPage>(&line) {
            Ok(msg) => {
                let stop = matches!(msg, MsgToPage::Shutdown);
                match host.deliver(msg) {
                    Ok(()) => {}
                    Err(e @ Error::NotEditable(_)) => warn!(error = %e, "host_request_rejected"),
                    Err(e) => return Err(e),
                }
                if stop {
                    break;
                }
            }
            Err(codec::Error::Empty) => {}
            Err(e) => warn!(error = %e, "host_line_rejected"),
        }
    }

    // Harmless if the page already stopped.
    if host.deliver(MsgToPage::Shutdown).is_err() {
        debug!("page_already_stopped");
    }
    if page_task.await.is_err() {
        warn!("page_task_failed");
    }
    info!("session_finished");

    forward::clear_sink();
    drop(host);
    writer.await.map_err(|_| Error::ChannelClosed)?
}
