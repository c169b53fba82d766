//! The slide data model shared by every pipeline stage.
//!
//! A [`Slide`] is one page of the source document: its extracted text and
//! the raw bytes of every embedded image, in page order. Filters mutate a
//! slide's fields in place but never remove or reorder slides, so the
//! document always keeps one slide per source page.

use serde::{Deserialize, Serialize};

/// One page's extracted content.
///
/// `images` holds the raw encoded bytes of each embedded image in the
/// order they appeared on the page. A page with no images yields an empty
/// vector, never a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Extracted page text, possibly multi-line. Empty when extraction
    /// failed or the page carries no text.
    pub text: String,

    /// Raw bytes of each embedded image, in page order.
    pub images: Vec<Vec<u8>>,
}

impl Slide {
    /// Create a slide from extracted text and image blobs.
    pub fn new(text: impl Into<String>, images: Vec<Vec<u8>>) -> Self {
        Self {
            text: text.into(),
            images,
        }
    }

    /// True when the slide carries neither text nor images.
    ///
    /// Empty slides are ordinary pipeline input; they are preserved so the
    /// output stays aligned with the source document's page numbering.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.images.is_empty()
    }

    /// Number of embedded images currently on the slide.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slide() {
        let slide = Slide::default();
        assert!(slide.is_empty());
        assert_eq!(slide.image_count(), 0);
    }

    #[test]
    fn slide_with_only_images_is_not_empty() {
        let slide = Slide::new("", vec![vec![1, 2, 3]]);
        assert!(!slide.is_empty());
        assert_eq!(slide.image_count(), 1);
    }

    #[test]
    fn serde_round_trip() {
        let slide = Slide::new("Agenda\nQ3 numbers", vec![vec![0xFF, 0xD8]]);
        let json = serde_json::to_string(&slide).unwrap();
        let back: Slide = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slide);
    }
}
