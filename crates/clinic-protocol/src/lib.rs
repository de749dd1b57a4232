//! Messages exchanged between the clinic page and the editor host.
//!
//! The host owns the authoritative configuration. It pushes full snapshots to
//! the page and asks for editor views of its store ([`MsgToPage`]); the page
//! answers with registrations, single-field partial updates, apply
//! acknowledgements, views and forwarded logs ([`MsgToHost`]).
use config::{Configuration, Field, Value};
use serde::{Deserialize, Serialize};

/// Editor views carried by replies.
mod views;

pub use views::{CapabilityState, CapabilityValue, EditPanelValues};

/// Monotonic sequence number the host attaches to each delivered snapshot.
pub type Revision = u64;

/// Messages delivered from the host to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MsgToPage {
    /// A full configuration snapshot (initial load or editor-driven change).
    /// Each snapshot supersedes every previous one.
    ConfigChanged {
        /// Sequence number echoed back in [`MsgToHost::Applied`].
        revision: Revision,
        /// The host's current configuration.
        config: Configuration,
    },

    /// Ask for the capability set derived from `config`.
    /// Answered with [`MsgToHost::Capabilities`].
    DescribeCapabilities {
        /// The host's current configuration.
        config: Configuration,
    },

    /// Ask for the edit-panel values derived from `config`.
    /// Answered with [`MsgToHost::EditPanel`].
    DescribeEditPanel {
        /// The host's current configuration.
        config: Configuration,
    },

    /// Invoke the setter of the capability bound to `field`.
    /// The page answers with a [`MsgToHost::SetConfig`] for that field alone.
    SetCapability {
        /// A color, font family or font size field.
        field: Field,
        /// New value.
        value: Value,
    },

    /// Stop processing and release the page.
    Shutdown,
}

/// Messages sent from the page to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MsgToHost {
    /// Sent once at startup with the page's default configuration.
    Register {
        /// Total mapping of every recognized field to its default.
        default_config: Configuration,
    },

    /// Partial update to merge into the host's configuration store.
    SetConfig {
        /// Only the fields being changed.
        update: Configuration,
    },

    /// The snapshot with this revision has been applied to the document.
    Applied {
        /// Revision from the matching [`MsgToPage::ConfigChanged`].
        revision: Revision,
    },

    /// Reply to [`MsgToPage::DescribeCapabilities`].
    Capabilities {
        /// Every capability with its effective value.
        state: CapabilityState,
    },

    /// Reply to [`MsgToPage::DescribeEditPanel`].
    EditPanel {
        /// Text fields in form order.
        values: EditPanelValues,
    },

    /// A forwarded log event.
    Log {
        /// Severity level.
        level: String,
        /// Event target (module path).
        target: String,
        /// Rendered message.
        message: String,
    },
}

/// IPC-related helpers: channel aliases and message codec.
pub mod ipc {
    use super::{MsgToHost, MsgToPage};

    /// Tokio unbounded sender for messages to the host.
    pub type HostTx = tokio::sync::mpsc::UnboundedSender<MsgToHost>;
    /// Tokio unbounded receiver for messages to the host.
    pub type HostRx = tokio::sync::mpsc::UnboundedReceiver<MsgToHost>;

    /// Create a channel carrying page-to-host messages.
    pub fn host_channel() -> (HostTx, HostRx) {
        tokio::sync::mpsc::unbounded_channel::<MsgToHost>()
    }

    /// Tokio unbounded sender for messages to the page.
    pub type PageTx = tokio::sync::mpsc::UnboundedSender<MsgToPage>;
    /// Tokio unbounded receiver for messages to the page.
    pub type PageRx = tokio::sync::mpsc::UnboundedReceiver<MsgToPage>;

    /// Create a channel carrying host-to-page messages.
    pub fn page_channel() -> (PageTx, PageRx) {
        tokio::sync::mpsc::unbounded_channel::<MsgToPage>()
    }

    /// Line codec used when the host talks to the page over a byte stream.
    pub mod codec;
}
