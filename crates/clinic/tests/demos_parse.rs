//! Integration tests for the sample configurations under `demos/`.

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use clinic_protocol::{MsgToPage, ipc::codec};
    use config::{Field, Value};

    fn demos_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent() // crates
            .and_then(|p| p.parent()) // workspace root
            .expect("workspace root")
            .join("demos")
    }

    #[test]
    fn parse_all_demo_configs() {
        let mut found = 0usize;
        for entry in fs::read_dir(demos_dir()).expect("read demos dir") {
            let path = entry.unwrap().path();
            let ext = path.extension().and_then(|s| s.to_str());
            if !matches!(ext, Some("json" | "ron")) {
                continue;
            }
            found += 1;
            let parsed = config::load_from_path(&path);
            assert!(
                parsed.is_ok(),
                "failed to parse {}: {:?}",
                path.display(),
                parsed.err()
            );
        }
        assert!(found >= 2, "expected demo configs in demos/");
    }

    #[test]
    fn site_demo_drops_null_values() {
        let cfg = config::load_from_path(&demos_dir().join("site.json")).unwrap();
        assert!(!cfg.contains(Field::SecondaryActionColor));
        assert_eq!(cfg.get(Field::FontSize), Some(&Value::from(18)));
    }

    #[test]
    fn session_demo_is_valid_protocol() {
        let text = fs::read_to_string(demos_dir().join("session.jsonl")).unwrap();
        let msgs: Vec<MsgToPage> = text
            .lines()
            .map(|l| codec::decode_line(l).unwrap())
            .collect();
        assert_eq!(msgs.len(), 7);
        assert!(msgs.contains(&MsgToPage::SetCapability {
            field: Field::FontSize,
            value: Value::from(20),
        }));
        assert_eq!(msgs.last(), Some(&MsgToPage::Shutdown));
    }
}
