use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors from encoding/decoding protocol lines.
#[derive(Debug, Error)]
pub enum Error {
    /// The line held no message.
    #[error("empty message line")]
    Empty,
    /// Deserialization via serde_json failed.
    #[error("invalid message: {0}")]
    Decode(#[source] serde_json::Error),
    /// Serialization via serde_json failed.
    #[error("cannot encode message: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Encode a message as a single JSON line (without the trailing newline).
pub fn encode_line<T: Serialize>(msg: &T) -> Result<String, Error> {
    serde_json::to_string(msg).map_err(Error::Encode)
}

/// Decode a single JSON line into a message. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns [`Error::Empty`] for a blank line and [`Error::Decode`] when the
/// line is not a valid message.
pub fn decode_line<T: DeserializeOwned>(line: &str) -> Result<T, Error> {
    let line = line.trim();
    if line.is_empty() {
        return Err(Error::Empty);
    }
    serde_json::from_str(line).map_err(Error::Decode)
}
