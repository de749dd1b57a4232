//! Seam between the page and an optional editor host.
//!
//! The host is injected as an `Option<Arc<dyn HostSdk>>`; `None` means the
//! page renders its defaults and capability setters do nothing. A host
//! receives a [`Registration`] once at startup and pushes snapshots back
//! through the [`ConfigSink`] it carries.

use std::{
    fmt,
    sync::{Arc, Weak},
};

use clinic_protocol::{EditPanelValues, MsgToPage, Revision, ipc::PageTx};
use config::Configuration;
use tracing::{debug, trace, warn};

use crate::{
    capabilities::{Capabilities, map_to_capabilities},
    edit_panel::map_to_edit_panel_values,
    error::{Error, Result},
};

/// Operations the page needs from an editor host.
pub trait HostSdk: Send + Sync {
    /// Register the page. Called once, before any other method.
    fn init(&self, registration: Registration) -> Result<()>;

    /// Ask the host to merge `update` into its store and re-deliver.
    fn set_config(&self, update: Configuration) -> Result<()>;

    /// The snapshot tagged `revision` has been applied.
    fn config_applied(&self, _revision: Revision) {}
}

/// Mappers the host may call at any time with its current configuration.
pub trait EditorSurface: Send + Sync {
    /// Capability descriptors for `config`, bound to this page's host.
    fn map_to_capabilities(&self, config: &Configuration) -> Capabilities;

    /// Edit-form values for `config`.
    fn map_to_edit_panel_values(&self, config: &Configuration) -> EditPanelValues;
}

/// Weak, cloneable reference to the host used by capability setters.
///
/// Detached handles (no host present) accept updates and drop them.
#[derive(Clone, Default)]
pub struct HostHandle {
    /// `None` when no host is present.
    sdk: Option<Weak<dyn HostSdk>>,
}

impl HostHandle {
    /// Handle to `sdk` that does not keep it alive.
    pub fn new(sdk: &Arc<dyn HostSdk>) -> Self {
        Self {
            sdk: Some(Arc::downgrade(sdk)),
        }
    }

    /// A handle with no host behind it.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Whether a host is present and still alive.
    pub fn is_attached(&self) -> bool {
        self.sdk.as_ref().is_some_and(|w| w.strong_count() > 0)
    }

    /// Forward a partial update to the host.
    pub fn request_update(&self, update: Configuration) -> Result<()> {
        let Some(weak) = &self.sdk else {
            trace!(fields = update.len(), "update_dropped_no_host");
            return Ok(());
        };
        let sdk = weak.upgrade().ok_or(Error::ChannelClosed)?;
        debug!(fields = update.len(), "update_requested");
        sdk.set_config(update)
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandle")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Change-notification handle given to the host.
///
/// Delivering a snapshot queues it for the page; the page applies snapshots
/// one at a time in the order they were delivered.
#[derive(Debug, Clone)]
pub struct ConfigSink {
    /// The page's host inbox.
    tx: PageTx,
}

impl ConfigSink {
    /// Sink feeding the page inbox behind `tx`.
    pub fn new(tx: PageTx) -> Self {
        Self { tx }
    }

    /// Queue a full snapshot tagged `revision`.
    pub fn deliver(&self, revision: Revision, config: Configuration) -> Result<()> {
        self.send(MsgToPage::ConfigChanged { revision, config })
    }

    /// Ask the page to stop.
    pub fn shutdown(&self) -> Result<()> {
        self.send(MsgToPage::Shutdown)
    }

    /// Forward a raw host message.
    pub fn send(&self, msg: MsgToPage) -> Result<()> {
        self.tx.send(msg).map_err(|_| Error::ChannelClosed)
    }
}

/// Everything a host receives from the page at startup.
#[derive(Clone)]
pub struct Registration {
    /// Total mapping of every field to its default.
    pub default_config: Configuration,
    /// Where the host delivers snapshots.
    pub on_config_change: ConfigSink,
    /// Mappers the host may call with its own configuration.
    pub surface: Arc<dyn EditorSurface>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("default_config", &self.default_config)
            .field("on_config_change", &self.on_config_change)
            .finish_non_exhaustive()
    }
}

/// The clinic page's mappers, bound to the host that will receive edits.
#[derive(Debug, Clone)]
pub struct SiteSurface {
    /// Receives capability updates.
    host: HostHandle,
}

impl SiteSurface {
    /// Surface whose setters report to `host`.
    pub fn new(host: HostHandle) -> Self {
        Self { host }
    }
}

impl EditorSurface for SiteSurface {
    fn map_to_capabilities(&self, config: &Configuration) -> Capabilities {
        map_to_capabilities(config, &self.host)
    }

    fn map_to_edit_panel_values(&self, config: &Configuration) -> EditPanelValues {
        map_to_edit_panel_values(config)
    }
}

/// Register with `sdk` when one is present.
///
/// Returns the handle capability setters should use. A failed registration
/// is logged and leaves the page rendering its defaults.
pub fn attach(
    sdk: Option<&Arc<dyn HostSdk>>,
    default_config: &Configuration,
    sink: ConfigSink,
) -> HostHandle {
    let Some(sdk) = sdk else {
        debug!("no_host_sdk");
        return HostHandle::detached();
    };
    let host = HostHandle::new(sdk);
    let registration = Registration {
        default_config: default_config.clone(),
        on_config_change: sink,
        surface: Arc::new(SiteSurface::new(host.clone())),
    };
    match sdk.init(registration) {
        Ok(()) => {
            debug!("host_registered");
            host
        }
        Err(e) => {
            warn!(error = %e, "host_registration_failed");
            HostHandle::detached()
        }
    }
}
