//! Review carousel.
//!
//! Slides and indicators are matched by position. Showing a slide marks the
//! outgoing one `prev` so the stylesheet can animate it out.

use std::time::Duration;

use tracing::trace;

use crate::document::{Document, Target};

/// Number of reviews on the page.
pub const REVIEW_COUNT: usize = 4;

/// Delay between automatic advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Active review slide and the number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewCarousel {
    /// Index of the active slide; may exceed `total`.
    current: usize,
    /// Number of slides to cycle through.
    total: usize,
}

impl Default for ReviewCarousel {
    fn default() -> Self {
        Self::new(REVIEW_COUNT)
    }
}

impl ReviewCarousel {
    /// Carousel over `total` slides, starting at the first.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Index of the active slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Make slide `index` active.
    ///
    /// An index with no slide still becomes current; the next advance wraps
    /// from it.
    pub fn show<D: Document + ?Sized>(&mut self, doc: &mut D, index: usize) {
        let slides = doc.select("review-slide");
        let indicators = doc.select("indicator");

        for id in &slides {
            doc.set_class(Target::Element(*id), "active", false);
            doc.set_class(Target::Element(*id), "prev", false);
        }
        for id in &indicators {
            doc.set_class(Target::Element(*id), "active", false);
        }

        if let Some(id) = slides.get(self.current) {
            doc.set_class(Target::Element(*id), "prev", true);
        }

        self.current = index;
        trace!(index, "review_shown");

        if let Some(id) = slides.get(index) {
            doc.set_class(Target::Element(*id), "active", true);
        }
        if let Some(id) = indicators.get(index) {
            doc.set_class(Target::Element(*id), "active", true);
        }
    }

    /// Advance to the following slide, wrapping at the end.
    pub fn next<D: Document + ?Sized>(&mut self, doc: &mut D) {
        if self.total == 0 {
            return;
        }
        let index = (self.current % self.total + 1) % self.total;
        self.show(doc, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    fn active(doc: &MemoryDocument, class: &str) -> Vec<usize> {
        doc.select(class)
            .into_iter()
            .enumerate()
            .filter(|(_, id)| doc.has_class(Target::Element(*id), "active"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn next_wraps_and_marks_previous() {
        let mut doc = MemoryDocument::clinic_page();
        let mut carousel = ReviewCarousel::default();
        for _ in 0..REVIEW_COUNT - 1 {
            carousel.next(&mut doc);
        }
        assert_eq!(carousel.current(), 3);
        assert_eq!(active(&doc, "review-slide"), [3]);
        assert_eq!(active(&doc, "indicator"), [3]);
        let slides = doc.select("review-slide");
        assert!(doc.has_class(Target::Element(slides[2]), "prev"));
        assert!(!doc.has_class(Target::Element(slides[1]), "prev"));

        carousel.next(&mut doc);
        assert_eq!(carousel.current(), 0);
        assert_eq!(active(&doc, "review-slide"), [0]);
    }

    #[test]
    fn out_of_range_only_moves_index() {
        let mut doc = MemoryDocument::clinic_page();
        let mut carousel = ReviewCarousel::default();
        carousel.show(&mut doc, 9);
        assert_eq!(carousel.current(), 9);
        assert!(active(&doc, "review-slide").is_empty());
        carousel.next(&mut doc);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn advance_from_largest_index_wraps() {
        let mut doc = MemoryDocument::clinic_page();
        let mut carousel = ReviewCarousel::default();
        carousel.show(&mut doc, usize::MAX);
        carousel.next(&mut doc);
        assert_eq!(carousel.current(), (usize::MAX % REVIEW_COUNT + 1) % REVIEW_COUNT);
        assert_eq!(active(&doc, "review-slide"), [carousel.current()]);
    }
}
