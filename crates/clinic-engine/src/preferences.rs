//! Page-local preference storage (theme and language).

use std::collections::HashMap;

/// Key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";
/// Key holding `"en"` or `"ar"`.
pub const LANGUAGE_KEY: &str = "language";

/// String key/value storage owned by the page's environment.
pub trait Preferences: Send {
    /// Stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// Preferences kept in memory for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    /// Stored values by key.
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with `key` preset to `value`.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
