//! Document abstraction the page renders into.
//!
//! The page only ever writes: text content of marked elements, inline style
//! properties, attributes and classes. [`Document`] captures exactly that
//! surface so the core can drive a browser DOM binding, a test double, or the
//! in-memory [`MemoryDocument`] used by the CLI.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Handle to an element returned by [`Document::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub usize);

/// Where a style, attribute or class write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document element (`<html>`); CSS custom properties live here.
    Root,
    /// The `<body>` element.
    Body,
    /// Any other element.
    Element(ElementId),
}

/// Write-side view of a rendered document.
///
/// Writes to unknown elements are silently ignored; implementations must
/// never panic on a stale [`ElementId`].
pub trait Document {
    /// Every element carrying `class`, in document order. May be empty.
    fn select(&self, class: &str) -> Vec<ElementId>;

    /// Replace the text content of an element.
    fn set_text(&mut self, id: ElementId, text: &str);

    /// Set an inline style property (including `--custom` properties).
    fn set_style(&mut self, target: Target, property: &str, value: &str);

    /// Set attribute `name` on `target`.
    fn set_attribute(&mut self, target: Target, name: &str, value: &str);

    /// Remove attribute `name` from `target`.
    fn remove_attribute(&mut self, target: Target, name: &str);

    /// Add (`present == true`) or remove a class.
    fn set_class(&mut self, target: Target, class: &str, present: bool);
}

/// A single element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Class list.
    pub classes: BTreeSet<String>,
    /// Text content.
    pub text: String,
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Inline style properties by name.
    pub style: BTreeMap<String, String>,
}

impl Node {
    /// Element with `classes` and initial `text`.
    fn with_classes(classes: &[&str], text: &str) -> Self {
        Self {
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            text: text.to_string(),
            ..Self::default()
        }
    }
}

/// Flat in-memory document: a root, a body, and a list of elements.
///
/// Equality compares the full rendered state, which makes idempotence checks
/// a plain `assert_eq!`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryDocument {
    /// The `<html>` element.
    root: Node,
    /// The `<body>` element.
    body: Node,
    /// Every other element, in document order.
    elements: Vec<Node>,
}

impl MemoryDocument {
    /// Document with an empty root and body and no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with the given classes and initial text.
    pub fn push(&mut self, classes: &[&str], text: &str) -> ElementId {
        self.elements.push(Node::with_classes(classes, text));
        ElementId(self.elements.len() - 1)
    }

    /// Node behind `target`, if it exists.
    pub fn node(&self, target: Target) -> Option<&Node> {
        match target {
            Target::Root => Some(&self.root),
            Target::Body => Some(&self.body),
            Target::Element(ElementId(i)) => self.elements.get(i),
        }
    }

    /// Mutable node behind `target`.
    fn node_mut(&mut self, target: Target) -> Option<&mut Node> {
        match target {
            Target::Root => Some(&mut self.root),
            Target::Body => Some(&mut self.body),
            Target::Element(ElementId(i)) => self.elements.get_mut(i),
        }
    }

    /// Text content of element `id`.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.node(Target::Element(id)).map(|n| n.text.as_str())
    }

    /// Text of every element carrying `class`, in document order.
    pub fn texts(&self, class: &str) -> Vec<&str> {
        self.select(class)
            .into_iter()
            .filter_map(|id| self.text(id))
            .collect()
    }

    /// Inline style `property` of `target`.
    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.node(target)
            .and_then(|n| n.style.get(property))
            .map(String::as_str)
    }

    /// Attribute `name` of `target`.
    pub fn attribute(&self, target: Target, name: &str) -> Option<&str> {
        self.node(target)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    /// Whether `target` carries `class`.
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.node(target).is_some_and(|n| n.classes.contains(class))
    }

    /// Skeleton of the clinic page: every marker slot, language spans, theme
    /// icons, the review carousel and the contact button.
    ///
    /// Text slots start empty; the page fills them from the configuration.
    pub fn clinic_page() -> Self {
        let mut doc = Self::new();
        doc.body.classes.insert("ltr".to_string());

        // Navigation
        doc.push(&["doctor-name-en", "lang-en"], "");
        doc.push(&["doctor-name-ar", "lang-ar", "hidden-lang"], "");
        doc.push(&["theme-icon-moon"], "");
        doc.push(&["theme-icon-sun", "hidden"], "");

        // Hero
        doc.push(&["doctor-name-en", "lang-en"], "");
        doc.push(&["doctor-name-ar", "lang-ar", "hidden-lang"], "");
        doc.push(&["specialty-en", "lang-en"], "");
        doc.push(&["specialty-ar", "lang-ar", "hidden-lang"], "");
        doc.push(&["clinic-phone"], "");

        // Reviews
        doc.push(&["reviews-carousel"], "");
        for i in 0..crate::carousel::REVIEW_COUNT {
            let slide = doc.push(&["review-slide"], "");
            let indicator = doc.push(&["indicator"], "");
            if i == 0 {
                doc.set_class(Target::Element(slide), "active", true);
                doc.set_class(Target::Element(indicator), "active", true);
            }
        }

        // Contact
        doc.push(&["clinic-phone"], "");
        doc.push(&["clinic-email"], "");
        doc.push(&["clinic-address-en", "lang-en"], "");
        doc.push(&["clinic-address-ar", "lang-ar", "hidden-lang"], "");
        doc.push(
            &["contact-submit", "bg-blue-600", "hover:bg-blue-700"],
            crate::contact::SubmitState::Idle.label(crate::locale::Language::En),
        );

        // Footer
        doc.push(&["doctor-name-en", "lang-en"], "");
        doc.push(&["doctor-name-ar", "lang-ar", "hidden-lang"], "");
        doc.push(&["clinic-phone"], "");
        doc
    }
}

impl Document for MemoryDocument {
    fn select(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.contains(class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(n) = self.node_mut(Target::Element(id)) {
            n.text = text.to_string();
        }
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        if let Some(n) = self.node_mut(target) {
            n.style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) {
        if let Some(n) = self.node_mut(target) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, target: Target, name: &str) {
        if let Some(n) = self.node_mut(target) {
            n.attributes.remove(name);
        }
    }

    fn set_class(&mut self, target: Target, class: &str, present: bool) {
        if let Some(n) = self.node_mut(target) {
            if present {
                n.classes.insert(class.to_string());
            } else {
                n.classes.remove(class);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_returns_document_order() {
        let mut doc = MemoryDocument::new();
        let a = doc.push(&["clinic-phone"], "");
        doc.push(&["clinic-email"], "");
        let c = doc.push(&["clinic-phone", "lang-en"], "");
        assert_eq!(doc.select("clinic-phone"), vec![a, c]);
        assert!(doc.select("clinic-fax").is_empty());
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut doc = MemoryDocument::new();
        let before = doc.clone();
        doc.set_text(ElementId(42), "x");
        doc.set_class(Target::Element(ElementId(42)), "active", true);
        doc.set_style(Target::Element(ElementId(42)), "color", "red");
        assert_eq!(doc, before);
    }

    #[test]
    fn class_toggling() {
        let mut doc = MemoryDocument::new();
        doc.set_class(Target::Root, "dark", true);
        assert!(doc.has_class(Target::Root, "dark"));
        doc.set_class(Target::Root, "dark", false);
        assert!(!doc.has_class(Target::Root, "dark"));
    }

    #[test]
    fn skeleton_has_a_slot_for_every_text_field() {
        let doc = MemoryDocument::clinic_page();
        for field in config::Field::TEXT {
            let marker = field.marker().unwrap();
            assert!(!doc.select(marker).is_empty(), "{marker} missing");
        }
        assert_eq!(doc.select("review-slide").len(), 4);
        assert_eq!(doc.select("indicator").len(), 4);
    }
}
