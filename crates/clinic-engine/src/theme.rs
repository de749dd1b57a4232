use std::str::FromStr;

use crate::{
    document::{Document, Target},
    preferences::{Preferences, THEME_KEY},
};

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light palette (no root class).
    #[default]
    Light,
    /// Dark palette (`dark` class on the root).
    Dark,
}

impl Theme {
    /// Dark only when the stored preference says so.
    pub fn from_preferences(prefs: &dyn Preferences) -> Self {
        match prefs.get(THEME_KEY).as_deref() {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Stored theme name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Set the root `dark` class and show the matching toggle icon.
    pub fn apply<D: Document + ?Sized>(self, doc: &mut D) {
        let dark = self == Self::Dark;
        doc.set_class(Target::Root, "dark", dark);
        // The moon offers dark mode, so it shows while light is active.
        if let Some(moon) = doc.select("theme-icon-moon").first().copied() {
            doc.set_class(Target::Element(moon), "hidden", dark);
        }
        if let Some(sun) = doc.select("theme-icon-sun").first().copied() {
            doc.set_class(Target::Element(sun), "hidden", !dark);
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{document::MemoryDocument, preferences::MemoryPreferences};

    #[test]
    fn only_dark_preference_selects_dark() {
        let prefs = MemoryPreferences::new().with(THEME_KEY, "dark");
        assert_eq!(Theme::from_preferences(&prefs), Theme::Dark);
        let prefs = MemoryPreferences::new().with(THEME_KEY, "sepia");
        assert_eq!(Theme::from_preferences(&prefs), Theme::Light);
        assert_eq!(Theme::from_preferences(&MemoryPreferences::new()), Theme::Light);
    }

    #[test]
    fn parses_names() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn apply_swaps_icons() {
        let mut doc = MemoryDocument::clinic_page();
        let moon = doc.select("theme-icon-moon")[0];
        let sun = doc.select("theme-icon-sun")[0];

        Theme::Dark.apply(&mut doc);
        assert!(doc.has_class(Target::Root, "dark"));
        assert!(doc.has_class(Target::Element(moon), "hidden"));
        assert!(!doc.has_class(Target::Element(sun), "hidden"));

        Theme::Dark.toggled().apply(&mut doc);
        assert!(!doc.has_class(Target::Root, "dark"));
        assert!(!doc.has_class(Target::Element(moon), "hidden"));
        assert!(doc.has_class(Target::Element(sun), "hidden"));
    }
}
