use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for the clinic engine.
///
/// Applying a configuration never fails; these errors only arise at the
/// edges where the page talks to a host or reads input.
#[derive(Debug, Error)]
pub enum Error {
    /// The channel to or from the host has been closed.
    #[error("host channel closed")]
    ChannelClosed,

    /// The host refused the page's registration.
    #[error("host registration failed: {0}")]
    Registration(String),

    /// The field has no capability, so the editor cannot set it directly.
    #[error("field '{0}' is not editable through a capability")]
    NotEditable(config::Field),

    /// A protocol line could not be encoded or decoded.
    #[error("Protocol error: {0}")]
    Codec(#[from] clinic_protocol::ipc::codec::Error),

    /// I/O failure while talking to a host over a stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
