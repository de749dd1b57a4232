//! Editor-facing views of a configuration, as they travel to the host.

use std::fmt;

use config::{Field, Value};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// A capability's field and its current effective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityValue {
    /// Field the capability edits.
    pub field: Field,
    /// Effective value in the snapshot the capability was derived from.
    pub value: Value,
}

/// Current values of a full capability set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityState {
    /// Color capabilities in recolorable order.
    pub recolorables: Vec<CapabilityValue>,
    /// Border capabilities; the page defines none.
    pub borderables: Vec<CapabilityValue>,
    /// Body font family.
    pub font_editable: CapabilityValue,
    /// Body font size.
    pub font_size_editable: CapabilityValue,
}

/// Ordered field to effective value pairs shown in the host's edit form.
///
/// Serializes as an object whose key order matches the form layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPanelValues(Vec<(Field, Value)>);

impl EditPanelValues {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value shown for `field`, if the form has it.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    /// Wire keys in form order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(f, _)| f.key())
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Value)> {
        self.0.iter().map(|(f, v)| (*f, v))
    }
}

impl FromIterator<(Field, Value)> for EditPanelValues {
    fn from_iter<I: IntoIterator<Item = (Field, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for EditPanelValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in &self.0 {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EditPanelValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        /// Keeps entries in the order they appear on the wire.
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = EditPanelValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of configuration fields to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    let field = key.parse::<Field>().map_err(serde::de::Error::custom)?;
                    entries.push((field, value));
                }
                Ok(EditPanelValues(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
