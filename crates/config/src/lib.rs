//! Configuration model for the clinic site: recognized fields, scalar values,
//! partial configurations, the built-in defaults, and loading from disk.
#![allow(missing_docs)]

mod configuration;
mod defaults;
mod error;
mod field;
mod loader;
mod raw;
mod value;

#[cfg(test)]
mod test_merge;
#[cfg(test)]
mod test_parse;

pub use configuration::Configuration;
pub use defaults::{FONT_SIZE_PX, default_config, default_value};
pub use error::{Error, excerpt_at};
pub use field::{Field, FieldKind};
pub use loader::{Format, from_json_str, from_ron_str, load_from_path, parse_str};
pub use value::Value;
