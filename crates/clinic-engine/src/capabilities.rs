//! Capability descriptors exposed to the editor.
//!
//! Each [`Capability`] is bound to one field and to the configuration snapshot
//! it was derived from. `get` re-resolves the effective value on every call;
//! `set` sends a single-field update to the host and returns immediately. The
//! new value becomes visible only after the host re-delivers a snapshot.

use std::sync::Arc;

use clinic_protocol::{CapabilityState, CapabilityValue};
use config::{Configuration, Field, Value};
use tracing::warn;

use crate::bridge::HostHandle;

/// Get/set pair for one configuration field.
#[derive(Debug, Clone)]
pub struct Capability {
    /// Field this descriptor edits.
    field: Field,
    /// Configuration the descriptor was derived from.
    snapshot: Arc<Configuration>,
    /// Where `set` sends its update.
    host: HostHandle,
}

impl Capability {
    /// Descriptor for `field` over `snapshot`.
    fn new(field: Field, snapshot: &Arc<Configuration>, host: &HostHandle) -> Self {
        Self {
            field,
            snapshot: Arc::clone(snapshot),
            host: host.clone(),
        }
    }

    /// Field this capability edits.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Effective value of the field in the bound snapshot.
    pub fn get(&self) -> Value {
        self.snapshot.effective(self.field).into_owned()
    }

    /// Request that the host set this field, and only this field, to `value`.
    pub fn set(&self, value: impl Into<Value>) {
        let update = Configuration::single(self.field, value);
        if let Err(e) = self.host.request_update(update) {
            warn!(field = %self.field, error = %e, "capability_set_failed");
        }
    }

    /// Field and current value.
    fn state(&self) -> CapabilityValue {
        CapabilityValue {
            field: self.field,
            value: self.get(),
        }
    }
}

/// Capability set derived from one configuration snapshot.
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Background, surface, text, primary and secondary colors, in that order.
    pub recolorables: Vec<Capability>,
    /// Always empty; no border fields exist.
    pub borderables: Vec<Capability>,
    /// Body font family.
    pub font_editable: Capability,
    /// Body font size.
    pub font_size_editable: Capability,
}

impl Capabilities {
    /// The descriptor bound to `field`, if `field` is editable this way.
    pub fn find(&self, field: Field) -> Option<&Capability> {
        self.recolorables
            .iter()
            .chain(&self.borderables)
            .chain([&self.font_editable, &self.font_size_editable])
            .find(|c| c.field == field)
    }

    /// Current values of every descriptor, for display or serialization.
    pub fn state(&self) -> CapabilityState {
        CapabilityState {
            recolorables: self.recolorables.iter().map(Capability::state).collect(),
            borderables: self.borderables.iter().map(Capability::state).collect(),
            font_editable: self.font_editable.state(),
            font_size_editable: self.font_size_editable.state(),
        }
    }
}

/// Derive the capability set for `config`; setters report to `host`.
pub fn map_to_capabilities(config: &Configuration, host: &HostHandle) -> Capabilities {
    let snapshot = Arc::new(config.clone());
    Capabilities {
        recolorables: Field::COLORS
            .into_iter()
            .map(|f| Capability::new(f, &snapshot, host))
            .collect(),
        borderables: Vec::new(),
        font_editable: Capability::new(Field::FontFamily, &snapshot, host),
        font_size_editable: Capability::new(Field::FontSize, &snapshot, host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_recolorables_in_order_and_no_borderables() {
        let caps = map_to_capabilities(&Configuration::new(), &HostHandle::detached());
        let fields: Vec<_> = caps.recolorables.iter().map(Capability::field).collect();
        assert_eq!(
            fields,
            [
                Field::BackgroundColor,
                Field::SurfaceColor,
                Field::TextColor,
                Field::PrimaryActionColor,
                Field::SecondaryActionColor,
            ]
        );
        assert!(caps.borderables.is_empty());
        assert_eq!(caps.font_editable.field(), Field::FontFamily);
        assert_eq!(caps.font_size_editable.field(), Field::FontSize);
    }

    #[test]
    fn get_resolves_against_snapshot() {
        let cfg = Configuration::single(Field::SurfaceColor, "#eeeeee");
        let caps = map_to_capabilities(&cfg, &HostHandle::detached());
        assert_eq!(caps.recolorables[1].get(), Value::from("#eeeeee"));
        assert_eq!(caps.recolorables[0].get(), Value::from("#ffffff"));
        assert_eq!(caps.font_size_editable.get(), Value::from(16.0));
    }

    #[test]
    fn find_covers_only_capability_fields() {
        let caps = map_to_capabilities(&Configuration::new(), &HostHandle::detached());
        for field in Field::COLORS {
            assert_eq!(caps.find(field).map(Capability::field), Some(field));
        }
        assert!(caps.find(Field::FontSize).is_some());
        assert!(caps.find(Field::ClinicPhone).is_none());
    }

    #[test]
    fn state_serializes_field_keys() {
        let caps = map_to_capabilities(&Configuration::new(), &HostHandle::detached());
        let json = serde_json::to_value(caps.state()).unwrap();
        assert_eq!(json["font_editable"]["field"], "font_family");
        assert_eq!(json["font_editable"]["value"], "Inter");
        assert_eq!(json["recolorables"].as_array().unwrap().len(), 5);
        assert_eq!(json["borderables"].as_array().unwrap().len(), 0);
    }
}
