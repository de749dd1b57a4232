//! Page language and text direction.

use std::{fmt, str::FromStr};

use crate::document::{Document, Target};

/// Languages the page is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    /// English, left to right.
    #[default]
    En,
    /// Arabic, right to left.
    Ar,
}

impl Language {
    /// Stored language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the root `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// Interpret a stored preference. Unrecognized codes yield `None`.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Class carried by elements written in this language.
    fn class(self) -> &'static str {
        match self {
            Self::En => "lang-en",
            Self::Ar => "lang-ar",
        }
    }

    /// Set `lang`/`dir` on the root, the body direction class, and hide
    /// elements written in the other language.
    pub fn apply<D: Document + ?Sized>(self, doc: &mut D) {
        let other = self.toggled();
        doc.set_attribute(Target::Root, "lang", self.code());
        doc.set_attribute(Target::Root, "dir", self.dir());
        doc.set_class(Target::Body, self.dir(), true);
        doc.set_class(Target::Body, other.dir(), false);

        for id in doc.select(other.class()) {
            doc.set_class(Target::Element(id), "hidden-lang", true);
        }
        for id in doc.select(self.class()) {
            doc.set_class(Target::Element(id), "hidden-lang", false);
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(format!("unknown language '{other}' (expected en or ar)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    #[test]
    fn arabic_flips_direction_and_visibility() {
        let mut doc = MemoryDocument::clinic_page();
        Language::Ar.apply(&mut doc);

        assert_eq!(doc.attribute(Target::Root, "lang"), Some("ar"));
        assert_eq!(doc.attribute(Target::Root, "dir"), Some("rtl"));
        assert!(doc.has_class(Target::Body, "rtl"));
        assert!(!doc.has_class(Target::Body, "ltr"));
        for id in doc.select("lang-en") {
            assert!(doc.has_class(Target::Element(id), "hidden-lang"));
        }
        for id in doc.select("lang-ar") {
            assert!(!doc.has_class(Target::Element(id), "hidden-lang"));
        }
    }

    #[test]
    fn round_trip_restores_english_layout() {
        let mut doc = MemoryDocument::clinic_page();
        Language::En.apply(&mut doc);
        let english = doc.clone();
        Language::Ar.apply(&mut doc);
        Language::En.apply(&mut doc);
        assert_eq!(doc, english);
    }

    #[test]
    fn parsing() {
        assert_eq!("AR".parse::<Language>(), Ok(Language::Ar));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::from_stored("ar"), Some(Language::Ar));
        assert_eq!(Language::from_stored("fr"), None);
    }
}
