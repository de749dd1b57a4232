//! Presentation applier.
//!
//! [`Presentation::resolve`] turns a configuration into a flat plan of writes;
//! [`Presentation::apply`] performs them against a [`Document`]. Resolution is
//! a pure function of the configuration, so applying the same configuration
//! twice leaves the document unchanged the second time.

use config::{Configuration, Field};
use serde::Serialize;
use tracing::{debug, trace};

use crate::document::{Document, Target};

/// Generic fallback stack appended after the configured font family.
pub const FONT_STACK: &str = "system-ui, -apple-system, sans-serif";

/// Text content broadcast to every element carrying `marker`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBinding {
    /// Source field.
    pub field: Field,
    /// Marker class of the receiving elements.
    pub marker: &'static str,
    /// Text written to each element.
    pub text: String,
}

/// CSS custom property written on the document root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleBinding {
    /// Source field.
    pub field: Field,
    /// CSS custom property on the root.
    pub property: &'static str,
    /// Property value.
    pub value: String,
}

/// Everything the page writes for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    /// Text writes, in field order.
    pub texts: Vec<TextBinding>,
    /// Root CSS variables, in field order.
    pub variables: Vec<StyleBinding>,
    /// Body `font-family`, including [`FONT_STACK`].
    pub font_family: String,
    /// Body `font-size` in pixels.
    pub font_size: String,
}

/// Outcome of [`Presentation::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of element, root and body writes performed.
    pub nodes_written: usize,
    /// Text fields whose marker matched no element.
    pub markers_missing: usize,
}

impl Presentation {
    /// Resolve the effective value of every field in `config`.
    ///
    /// Values are rendered as-is: a font size of `"abc"` becomes `"abcpx"`.
    pub fn resolve(config: &Configuration) -> Self {
        let texts = Field::TEXT
            .into_iter()
            .filter_map(|field| {
                field.marker().map(|marker| TextBinding {
                    field,
                    marker,
                    text: config.effective(field).to_string(),
                })
            })
            .collect();

        let variables = Field::COLORS
            .into_iter()
            .filter_map(|field| {
                field.css_var().map(|property| StyleBinding {
                    field,
                    property,
                    value: config.effective(field).to_string(),
                })
            })
            .collect();

        Self {
            texts,
            variables,
            font_family: format!("{}, {FONT_STACK}", config.effective(Field::FontFamily)),
            font_size: format!("{}px", config.effective(Field::FontSize)),
        }
    }

    /// Write this plan into `doc`. Missing targets are skipped.
    pub fn apply<D: Document + ?Sized>(&self, doc: &mut D) -> ApplyReport {
        let mut report = ApplyReport::default();

        for binding in &self.texts {
            let nodes = doc.select(binding.marker);
            if nodes.is_empty() {
                trace!(marker = binding.marker, "marker_missing");
                report.markers_missing += 1;
            }
            for id in nodes {
                doc.set_text(id, &binding.text);
                report.nodes_written += 1;
            }
        }

        for var in &self.variables {
            doc.set_style(Target::Root, var.property, &var.value);
            report.nodes_written += 1;
        }

        doc.set_style(Target::Body, "font-family", &self.font_family);
        doc.set_style(Target::Body, "font-size", &self.font_size);
        report.nodes_written += 2;

        debug!(
            written = report.nodes_written,
            missing = report.markers_missing,
            "presentation_applied"
        );
        report
    }
}

/// Resolve and apply `config` in one step.
pub fn apply_config<D: Document + ?Sized>(config: &Configuration, doc: &mut D) -> ApplyReport {
    Presentation::resolve(config).apply(doc)
}
