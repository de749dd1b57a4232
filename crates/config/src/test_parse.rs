#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use crate::{
        Configuration, Error, Field, Format, Value, from_json_str, from_ron_str, load_from_path,
    };

    #[test]
    fn json_snapshot_with_unknown_and_null_keys() {
        let cfg = from_json_str(
            r#"{
                "clinic_phone": "+20 111 2223334",
                "hero_image": {"src": "a.png"},
                "clinic_email": null,
                "font_size": 20
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.len(), 2);
        assert_eq!(cfg.get(Field::FontSize), Some(&Value::Number(20.0)));
        assert!(!cfg.contains(Field::ClinicEmail));
    }

    #[test]
    fn ron_snapshot() {
        let cfg = from_ron_str(r#"{"font_family": "Georgia", "specialty_en": Some("Cardiology")}"#)
            .unwrap();
        assert_eq!(cfg.get(Field::FontFamily), Some(&Value::from("Georgia")));
        assert_eq!(cfg.get(Field::SpecialtyEn), Some(&Value::from("Cardiology")));
    }

    #[test]
    fn empty_document_is_an_empty_configuration() {
        assert_eq!(from_json_str("{}").unwrap(), Configuration::new());
    }

    #[test]
    fn json_parse_error_has_location_and_excerpt() {
        let err = from_json_str("{\n  \"font_size\": ,\n}").unwrap_err();
        match err {
            Error::Parse {
                line, col, excerpt, ..
            } => {
                assert_eq!(line, Some(2));
                assert!(col.is_some());
                assert!(excerpt.unwrap().contains('^'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_map_documents_are_rejected() {
        assert!(from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.ron")), Some(Format::Ron));
        assert_eq!(Format::from_path(Path::new("a.toml")), None);
    }

    #[test]
    fn load_from_disk_attaches_path_to_errors() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("site.json");
        fs::write(&good, r##"{"text_color": "#101010"}"##).unwrap();
        let cfg = load_from_path(&good).unwrap();
        assert_eq!(cfg.get(Field::TextColor), Some(&Value::from("#101010")));

        let bad = dir.path().join("broken.json");
        fs::write(&bad, "{").unwrap();
        let err = load_from_path(&bad).unwrap_err();
        assert_eq!(err.path(), Some(bad.as_path()));

        let unsupported = dir.path().join("site.yaml");
        fs::write(&unsupported, "a: b").unwrap();
        assert!(matches!(
            load_from_path(&unsupported),
            Err(Error::Read { .. })
        ));
    }
}
