//! Host implementations.
//!
//! - [`ChannelHost`] speaks the message protocol over channels; the `clinic
//!   session` command bridges it to stdin/stdout. Editor requests are answered
//!   from the page's registered surface.
//! - [`MemoryHost`] keeps the authoritative configuration in process, merges
//!   partial updates and re-delivers full snapshots. It backs tests and
//!   offline rendering.

use std::sync::Arc;

use clinic_protocol::{MsgToHost, MsgToPage, Revision, ipc::HostTx};
use config::Configuration;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::{
    bridge::{EditorSurface, HostSdk, Registration},
    error::{Error, Result},
};

/// Host reached through a [`HostTx`] channel.
pub struct ChannelHost {
    /// Outbound messages to the remote host.
    tx: HostTx,
    /// Set once the page registers.
    registration: Mutex<Option<Registration>>,
}

impl ChannelHost {
    /// Host that sends every page message on `tx`.
    pub fn new(tx: HostTx) -> Self {
        Self {
            tx,
            registration: Mutex::new(None),
        }
    }

    /// Send one message to the remote host.
    fn send(&self, msg: MsgToHost) -> Result<()> {
        self.tx.send(msg).map_err(|_| Error::ChannelClosed)
    }

    /// Route a message from the remote host.
    ///
    /// Snapshots and shutdown go to the page's inbox. Capability and
    /// edit-panel requests are answered directly through the registered
    /// [`EditorSurface`].
    pub fn deliver(&self, msg: MsgToPage) -> Result<()> {
        let (sink, surface) = self
            .registration
            .lock()
            .as_ref()
            .map(|r| (r.on_config_change.clone(), Arc::clone(&r.surface)))
            .ok_or_else(|| Error::Registration("page has not registered".into()))?;
        match msg {
            MsgToPage::DescribeCapabilities { config } => {
                let state = surface.map_to_capabilities(&config).state();
                self.send(MsgToHost::Capabilities { state })
            }
            MsgToPage::DescribeEditPanel { config } => {
                let values = surface.map_to_edit_panel_values(&config);
                self.send(MsgToHost::EditPanel { values })
            }
            MsgToPage::SetCapability { field, value } => {
                let caps = surface.map_to_capabilities(&Configuration::new());
                let cap = caps.find(field).ok_or(Error::NotEditable(field))?;
                cap.set(value);
                Ok(())
            }
            msg @ (MsgToPage::ConfigChanged { .. } | MsgToPage::Shutdown) => sink.send(msg),
        }
    }

    /// The page's mappers, once registered.
    pub fn surface(&self) -> Option<Arc<dyn EditorSurface>> {
        self.registration
            .lock()
            .as_ref()
            .map(|r| Arc::clone(&r.surface))
    }
}

impl HostSdk for ChannelHost {
    fn init(&self, registration: Registration) -> Result<()> {
        self.send(MsgToHost::Register {
            default_config: registration.default_config.clone(),
        })?;
        *self.registration.lock() = Some(registration);
        Ok(())
    }

    fn set_config(&self, update: Configuration) -> Result<()> {
        self.send(MsgToHost::SetConfig { update })
    }

    fn config_applied(&self, revision: Revision) {
        if self.send(MsgToHost::Applied { revision }).is_err() {
            trace!(revision, "applied_ack_dropped");
        }
    }
}

/// Mutable state of a [`MemoryHost`].
#[derive(Default)]
struct MemoryHostState {
    /// Set once the page registers.
    registration: Option<Registration>,
    /// Authoritative configuration.
    store: Configuration,
    /// Revision of the last delivery.
    revision: Revision,
    /// Partial updates received from the page.
    updates: Vec<Configuration>,
    /// Revisions the page acknowledged.
    applied: Vec<Revision>,
}

impl MemoryHostState {
    /// Deliver the current store as the next revision.
    fn publish(&mut self) -> Result<Revision> {
        let sink = self
            .registration
            .as_ref()
            .map(|r| r.on_config_change.clone())
            .ok_or_else(|| Error::Registration("page has not registered".into()))?;
        self.revision += 1;
        debug!(revision = self.revision, fields = self.store.len(), "host_publish");
        sink.deliver(self.revision, self.store.clone())?;
        Ok(self.revision)
    }
}

/// In-process host with an authoritative configuration store.
#[derive(Default)]
pub struct MemoryHost {
    /// Store, registration and history.
    state: Mutex<MemoryHostState>,
}

impl MemoryHost {
    /// Host with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose store starts out as `store`.
    pub fn with_store(store: Configuration) -> Self {
        Self {
            state: Mutex::new(MemoryHostState {
                store,
                ..MemoryHostState::default()
            }),
        }
    }

    /// Replace the store wholesale and re-deliver it.
    pub fn replace(&self, store: Configuration) -> Result<Revision> {
        let mut state = self.state.lock();
        state.store = store;
        state.publish()
    }

    /// Re-deliver the current store.
    pub fn publish(&self) -> Result<Revision> {
        self.state.lock().publish()
    }

    /// Current authoritative configuration.
    pub fn store(&self) -> Configuration {
        self.state.lock().store.clone()
    }

    /// Revision of the most recent delivery (0 before the first).
    pub fn revision(&self) -> Revision {
        self.state.lock().revision
    }

    /// Every partial update received from the page, in order.
    pub fn updates(&self) -> Vec<Configuration> {
        self.state.lock().updates.clone()
    }

    /// Revisions the page has acknowledged, in order.
    pub fn applied(&self) -> Vec<Revision> {
        self.state.lock().applied.clone()
    }

    /// Whether a page has registered.
    pub fn is_registered(&self) -> bool {
        self.state.lock().registration.is_some()
    }

    /// The page's mappers, once registered.
    pub fn surface(&self) -> Option<Arc<dyn EditorSurface>> {
        self.state
            .lock()
            .registration
            .as_ref()
            .map(|r| Arc::clone(&r.surface))
    }

    /// Stop the page's event loop.
    pub fn shutdown(&self) -> Result<()> {
        let state = self.state.lock();
        match &state.registration {
            Some(r) => r.on_config_change.shutdown(),
            None => Ok(()),
        }
    }
}

impl HostSdk for MemoryHost {
    fn init(&self, registration: Registration) -> Result<()> {
        let mut state = self.state.lock();
        state.registration = Some(registration);
        state.publish().map(|_| ())
    }

    fn set_config(&self, update: Configuration) -> Result<()> {
        let mut state = self.state.lock();
        state.store.merge(&update);
        state.updates.push(update);
        state.publish().map(|_| ())
    }

    fn config_applied(&self, revision: Revision) {
        self.state.lock().applied.push(revision);
    }
}
