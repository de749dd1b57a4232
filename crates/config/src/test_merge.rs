#[cfg(test)]
mod tests {
    use crate::{Configuration, Field, Value, default_config};

    #[test]
    fn host_merge_updates_only_the_sent_field() {
        // Authoritative store held by the host
        let mut store = Configuration::new()
            .with(Field::DoctorNameEn, "Dr. Layla Hassan")
            .with(Field::PrimaryActionColor, "#111111");
        let before = store.resolved();

        // A capability setter sends a single-field partial update
        store.merge(&Configuration::single(Field::SurfaceColor, "#eeeeee"));
        let after = store.resolved();

        for field in Field::ALL {
            if field == Field::SurfaceColor {
                assert_eq!(after.get(field), Some(&Value::from("#eeeeee")));
            } else {
                assert_eq!(after.get(field), before.get(field), "{field} changed");
            }
        }
    }

    #[test]
    fn overlay_over_defaults_is_the_overlay_resolved() {
        let user = ron::from_str::<Configuration>("{\"font_size\": 18, \"text_color\": \"#000\"}")
            .unwrap();
        let merged = default_config().clone().overlay(&user);
        assert_eq!(merged, user.resolved());
    }

    #[test]
    fn later_updates_supersede_earlier_ones() {
        let mut store = Configuration::new();
        store.merge(&Configuration::single(Field::FontFamily, "Georgia"));
        store.merge(&Configuration::single(Field::FontFamily, "Cairo"));
        assert_eq!(*store.effective(Field::FontFamily), Value::from("Cairo"));
        assert_eq!(store.len(), 1);
    }
}
