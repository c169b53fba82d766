//! Pipeline entry points: assemble slides, then run the three filters in
//! their fixed order.
//!
//! Every entry point validates the configuration before touching a page,
//! and every entry point upholds the slide-count invariant: the returned
//! sequence has exactly one slide per source page, whatever the filters
//! removed inside each slide. The pipeline holds no state between calls
//! and is safe to run concurrently on independent documents.

use crate::config::ScrubConfig;
use crate::error::ScrubError;
use crate::extract::{assemble_slides, PageSource};
use crate::pipeline::{dedup_images, dedup_phrases, uniform};
use crate::slide::Slide;
use std::time::Instant;
use tracing::{debug, info};

#[cfg(feature = "pdfium")]
use crate::extract::PdfiumSource;
#[cfg(feature = "pdfium")]
use pdfium_render::prelude::Pdfium;
#[cfg(feature = "pdfium")]
use std::path::Path;

/// Assemble one slide per page of `source`, then strip boilerplate.
///
/// Deterministic given identical page content and thresholds. Returns
/// `Err` only for an invalid configuration; extraction problems degrade
/// to empty slides rather than failing the run.
pub fn scrub<S: PageSource + ?Sized>(
    source: &S,
    config: &ScrubConfig,
) -> Result<Vec<Slide>, ScrubError> {
    config.validate()?;
    let slides = assemble_slides(source);
    Ok(run_filters(slides, config))
}

/// Strip boilerplate from an already-assembled slide collection.
///
/// Useful when the caller extracted pages itself. The returned vector has
/// the same length and slide order as the input.
pub fn scrub_slides(
    slides: Vec<Slide>,
    config: &ScrubConfig,
) -> Result<Vec<Slide>, ScrubError> {
    config.validate()?;
    Ok(run_filters(slides, config))
}

/// Bind to a pdfium library: next to the executable first, then the
/// system library. A failed bind is an error, never a panic.
#[cfg(feature = "pdfium")]
fn bind_pdfium() -> Result<Pdfium, ScrubError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| ScrubError::PdfiumBindingFailed(e.to_string()))?;
    Ok(Pdfium::new(bindings))
}

/// Open a PDF file and run the full pipeline over it.
///
/// Uses the system pdfium library via [`PdfiumSource`]; encrypted
/// documents take their password from [`ScrubConfig::password`].
#[cfg(feature = "pdfium")]
pub fn scrub_pdf(
    path: impl AsRef<Path>,
    config: &ScrubConfig,
) -> Result<Vec<Slide>, ScrubError> {
    config.validate()?;
    let pdfium = bind_pdfium()?;
    let source = PdfiumSource::open(&pdfium, path.as_ref(), config.password.as_deref())?;
    scrub(&source, config)
}

/// Like [`scrub_pdf`], but for a PDF already held in memory.
#[cfg(feature = "pdfium")]
pub fn scrub_pdf_bytes(
    bytes: &[u8],
    config: &ScrubConfig,
) -> Result<Vec<Slide>, ScrubError> {
    config.validate()?;
    let pdfium = bind_pdfium()?;
    let source = PdfiumSource::from_bytes(&pdfium, bytes, config.password.as_deref())?;
    scrub(&source, config)
}

/// The fixed filter sequence. Uniformity runs last so it only decodes
/// images that survived deduplication.
fn run_filters(mut slides: Vec<Slide>, config: &ScrubConfig) -> Vec<Slide> {
    let start = Instant::now();
    let images_before: usize = slides.iter().map(Slide::image_count).sum();

    dedup_images::remove_common_images(&mut slides, config.image_common_threshold);
    dedup_phrases::remove_common_phrases(&mut slides, config.phrase_common_threshold);
    uniform::remove_uniform_images(&mut slides, config.uniform_threshold);

    let images_after: usize = slides.iter().map(Slide::image_count).sum();
    debug!(
        image_common_threshold = config.image_common_threshold,
        phrase_common_threshold = config.phrase_common_threshold,
        uniform_threshold = config.uniform_threshold,
        "filter thresholds"
    );
    info!(
        slides = slides.len(),
        images_before,
        images_after,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scrub complete"
    );
    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        pages: Vec<(String, Vec<Vec<u8>>)>,
    }

    impl PageSource for StubSource {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> String {
            self.pages[index].0.clone()
        }

        fn page_images(&self, index: usize) -> Vec<Vec<u8>> {
            self.pages[index].1.clone()
        }
    }

    #[test]
    fn invalid_config_fails_before_extraction() {
        let source = StubSource { pages: vec![] };
        let config = ScrubConfig {
            image_common_threshold: 2.0,
            ..ScrubConfig::default()
        };
        assert!(matches!(
            scrub(&source, &config),
            Err(ScrubError::InvalidConfig(_))
        ));
    }

    #[test]
    fn slide_count_matches_page_count() {
        let source = StubSource {
            pages: (0..7)
                .map(|i| (format!("page {i}"), Vec::new()))
                .collect(),
        };
        let slides = scrub(&source, &ScrubConfig::default()).unwrap();
        assert_eq!(slides.len(), 7);
    }

    #[test]
    fn empty_document_returns_empty_sequence() {
        let source = StubSource { pages: vec![] };
        let slides = scrub(&source, &ScrubConfig::default()).unwrap();
        assert!(slides.is_empty());
    }

    #[test]
    fn scrub_slides_preserves_order_and_length() {
        let input = vec![
            Slide::new("one", vec![]),
            Slide::new("two", vec![]),
            Slide::new("three", vec![]),
        ];
        let out = scrub_slides(input.clone(), &ScrubConfig::default()).unwrap();
        assert_eq!(out, input, "nothing repeats, so nothing is removed");
    }
}
