//! Values shown in the host's edit form.

use clinic_protocol::EditPanelValues;
use config::{Configuration, Field};

/// Effective values of the text fields, identity first and English before
/// Arabic within each pair.
pub fn map_to_edit_panel_values(config: &Configuration) -> EditPanelValues {
    Field::TEXT
        .into_iter()
        .map(|f| (f, config.effective(f).into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_entries_in_form_order() {
        let values = map_to_edit_panel_values(&Configuration::new());
        assert_eq!(values.len(), 8);
        assert_eq!(
            values.keys().collect::<Vec<_>>(),
            [
                "doctor_name_en",
                "doctor_name_ar",
                "specialty_en",
                "specialty_ar",
                "clinic_phone",
                "clinic_email",
                "clinic_address_en",
                "clinic_address_ar",
            ]
        );
    }

    #[test]
    fn colors_are_not_edit_panel_fields() {
        let cfg = Configuration::single(Field::TextColor, "#000000");
        let values = map_to_edit_panel_values(&cfg);
        assert!(values.get(Field::TextColor).is_none());
    }

    #[test]
    fn serializes_in_order() {
        let cfg = Configuration::single(Field::ClinicEmail, "a@b.c");
        let json = serde_json::to_string(&map_to_edit_panel_values(&cfg)).unwrap();
        let phone = json.find("clinic_phone").unwrap();
        let email = json.find("\"clinic_email\":\"a@b.c\"").unwrap();
        assert!(json.starts_with("{\"doctor_name_en\""));
        assert!(phone < email);
    }
}
