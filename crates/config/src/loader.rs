//! Load configuration snapshots from JSON or RON sources.

use std::{ffi::OsStr, fs, path::Path};

use tracing::debug;

use crate::{Configuration, Error, excerpt_at};

/// Source formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("json") => Some(Self::Json),
            Some("ron") => Some(Self::Ron),
            _ => None,
        }
    }
}

/// Decode a JSON document into a configuration.
pub fn from_json_str(source: &str) -> Result<Configuration, Error> {
    serde_json::from_str(source).map_err(|e| {
        let (line, col) = (e.line(), e.column());
        // serde_json reports line 0 for errors without a position.
        let located = line > 0;
        Error::Parse {
            path: None,
            line: located.then_some(line),
            col: located.then_some(col),
            message: e.to_string(),
            excerpt: located.then(|| excerpt_at(source, line, col)),
        }
    })
}

/// Decode a RON document into a configuration.
pub fn from_ron_str(source: &str) -> Result<Configuration, Error> {
    ron::from_str(source).map_err(|e| Error::Parse {
        path: None,
        line: None,
        col: None,
        message: e.to_string(),
        excerpt: None,
    })
}

/// Decode `source` in the given format.
pub fn parse_str(source: &str, format: Format) -> Result<Configuration, Error> {
    match format {
        Format::Json => from_json_str(source),
        Format::Ron => from_ron_str(source),
    }
}

/// Load a configuration snapshot from `path` (`.json` or `.ron`).
pub fn load_from_path(path: &Path) -> Result<Configuration, Error> {
    let Some(format) = Format::from_path(path) else {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported config format (expected a .json or .ron file)".to_string(),
        });
    };
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    let cfg = parse_str(&source, format).map_err(|e| e.with_path(path))?;
    debug!(path = %path.display(), fields = cfg.len(), "loaded configuration");
    Ok(cfg)
}
