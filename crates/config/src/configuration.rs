//! Partial configuration snapshots and effective-value resolution.

use std::{borrow::Cow, collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{IgnoredAny, MapAccess, Visitor},
    ser::SerializeMap,
};
use tracing::debug;

use crate::{Field, Value, default_config, default_value, raw::Maybe};

/// A partial mapping from recognized fields to values.
///
/// Any field may be absent. Absent fields resolve to the default
/// configuration; a present field always wins, even when it is empty or zero.
/// Use [`Configuration::without_falsy`] to reproduce the truthiness rule of
/// browser scripts instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    /// Provided values, keyed and ordered by field.
    values: BTreeMap<Field, Value>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration carrying exactly one field.
    pub fn single(field: Field, value: impl Into<Value>) -> Self {
        Self::new().with(field, value)
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field, returning the value it replaced.
    pub fn set(&mut self, field: Field, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(field, value.into())
    }

    pub fn remove(&mut self, field: Field) -> Option<Value> {
        self.values.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Provided fields and values in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Value)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }

    /// The value used for `field`: the provided one, or the default.
    pub fn effective(&self, field: Field) -> Cow<'_, Value> {
        match self.values.get(&field) {
            Some(v) => Cow::Borrowed(v),
            None => default_config()
                .get(field)
                .map_or_else(|| Cow::Owned(default_value(field)), Cow::Borrowed),
        }
    }

    /// Overlay `update` onto this configuration; fields in `update` win.
    pub fn merge(&mut self, update: &Self) {
        for (field, value) in update.iter() {
            self.values.insert(field, value.clone());
        }
    }

    /// Consuming variant of [`Configuration::merge`].
    pub fn overlay(mut self, update: &Self) -> Self {
        self.merge(update);
        self
    }

    /// Copy of this configuration with falsy values (empty text, zero, NaN,
    /// `false`) dropped, so they fall back to defaults.
    pub fn without_falsy(&self) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|(_, v)| v.is_truthy())
                .map(|(f, v)| (*f, v.clone()))
                .collect(),
        }
    }

    /// A total configuration holding the effective value of every field.
    pub fn resolved(&self) -> Self {
        Self {
            values: Field::ALL
                .into_iter()
                .map(|f| (f, self.effective(f).into_owned()))
                .collect(),
        }
    }
}

impl FromIterator<(Field, Value)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (Field, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        /// Map visitor that keeps recognized keys and skips everything else.
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = Configuration;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of configuration fields")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Configuration, A::Error> {
                let mut cfg = Configuration::new();
                while let Some(key) = map.next_key::<String>()? {
                    match Field::from_key(&key) {
                        Some(field) => {
                            if let Some(value) = map.next_value::<Maybe<Value>>()?.into_option() {
                                cfg.set(field, value);
                            }
                        }
                        None => {
                            debug!(key = %key, "ignoring unrecognized configuration key");
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(cfg)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
