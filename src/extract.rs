//! Page extraction: the boundary between the scrub pipeline and whatever
//! understands the source document's page format.
//!
//! The pipeline only needs three things from a document — a page count,
//! each page's text, and each page's embedded image bytes — so that is
//! the whole of the [`PageSource`] trait. Extraction failures never
//! propagate: a page whose text cannot be read yields `""`, a page whose
//! images cannot be read yields an empty list, and the slide keeps its
//! position either way. This keeps [`assemble_slides`] total and the
//! slide count equal to the page count under all failure modes.
//!
//! With the `pdfium` feature (default) the crate bundles
//! [`PdfiumSource`], a `PageSource` over the pdfium library. Embedded
//! images are re-encoded to PNG so downstream filters always see a
//! decodable raster format regardless of how the document stored them.

use crate::slide::Slide;
use tracing::debug;

#[cfg(feature = "pdfium")]
use crate::error::ScrubError;
#[cfg(feature = "pdfium")]
use pdfium_render::prelude::*;
#[cfg(feature = "pdfium")]
use std::path::Path;
#[cfg(feature = "pdfium")]
use tracing::warn;

/// A paginated document the pipeline can pull text and images from.
///
/// Implementations must degrade rather than fail: return an empty string
/// or an empty image list for pages that cannot be read. `index` is
/// 0-based and callers only pass values below [`PageSource::page_count`].
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text of page `index`; empty when the page has no text or text
    /// extraction failed.
    fn page_text(&self, index: usize) -> String;

    /// Raw bytes of each embedded image on page `index`, in page order;
    /// empty when the page has no images or image extraction failed.
    fn page_images(&self, index: usize) -> Vec<Vec<u8>>;
}

/// Build one [`Slide`] per page, preserving page order.
///
/// No slide is ever dropped here, even when both text and images come
/// back empty — downstream filters treat empty content as ordinary input.
pub fn assemble_slides<S: PageSource + ?Sized>(source: &S) -> Vec<Slide> {
    let count = source.page_count();
    let mut slides = Vec::with_capacity(count);
    for index in 0..count {
        slides.push(Slide {
            text: source.page_text(index),
            images: source.page_images(index),
        });
    }
    debug!(pages = count, "assembled slides");
    slides
}

// ── Pdfium-backed source ─────────────────────────────────────────────────

/// A [`PageSource`] over a pdfium-loaded PDF document.
///
/// Borrows the [`Pdfium`] instance supplied by the caller, so several
/// documents can share one binding:
///
/// ```rust,no_run
/// use pdfium_render::prelude::Pdfium;
/// use slidescrub::{assemble_slides, PdfiumSource};
///
/// # fn main() -> Result<(), slidescrub::ScrubError> {
/// let pdfium = Pdfium::default();
/// let source = PdfiumSource::open(&pdfium, "deck.pdf".as_ref(), None)?;
/// let slides = assemble_slides(&source);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "pdfium")]
pub struct PdfiumSource<'a> {
    document: PdfDocument<'a>,
}

#[cfg(feature = "pdfium")]
impl<'a> PdfiumSource<'a> {
    /// Open a PDF file, optionally decrypting it with `password`.
    pub fn open(
        pdfium: &'a Pdfium,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<Self, ScrubError> {
        let document = pdfium
            .load_pdf_from_file(path, password)
            .map_err(|e| match e {
                PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
                    ScrubError::PasswordRequired {
                        path: path.to_path_buf(),
                    }
                }
                other => ScrubError::DocumentOpen {
                    path: path.to_path_buf(),
                    detail: other.to_string(),
                },
            })?;
        Ok(Self { document })
    }

    /// Open a PDF held in an in-memory buffer. The buffer must outlive
    /// the source; pdfium reads from it lazily.
    pub fn from_bytes(
        pdfium: &'a Pdfium,
        bytes: &'a [u8],
        password: Option<&str>,
    ) -> Result<Self, ScrubError> {
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, password)
            .map_err(|e| ScrubError::DocumentOpenBytes {
                detail: e.to_string(),
            })?;
        Ok(Self { document })
    }
}

#[cfg(feature = "pdfium")]
impl PageSource for PdfiumSource<'_> {
    fn page_count(&self) -> usize {
        let pages = self.document.pages();
        pages.len() as usize
    }

    fn page_text(&self, index: usize) -> String {
        let pages = self.document.pages();
        let page = match pages.get(index as u16) {
            Ok(page) => page,
            Err(e) => {
                warn!(page = index + 1, error = %e, "failed to load page, using empty text");
                return String::new();
            }
        };
        let text = match page.text() {
            Ok(text) => text.all(),
            Err(e) => {
                warn!(page = index + 1, error = %e, "text extraction failed, using empty text");
                String::new()
            }
        };
        text
    }

    fn page_images(&self, index: usize) -> Vec<Vec<u8>> {
        let pages = self.document.pages();
        let page = match pages.get(index as u16) {
            Ok(page) => page,
            Err(e) => {
                warn!(page = index + 1, error = %e, "failed to load page, skipping images");
                return Vec::new();
            }
        };

        let mut images = Vec::new();
        for object in page.objects().iter() {
            if let Some(image_object) = object.as_image_object() {
                match image_object.get_processed_image(&self.document) {
                    Ok(decoded) => {
                        let mut png = Vec::new();
                        match decoded.write_to(
                            &mut std::io::Cursor::new(&mut png),
                            image::ImageFormat::Png,
                        ) {
                            Ok(()) => images.push(png),
                            Err(e) => {
                                warn!(page = index + 1, error = %e, "PNG re-encoding failed, skipping image");
                            }
                        }
                    }
                    Err(e) => {
                        warn!(page = index + 1, error = %e, "image extraction failed, skipping image");
                    }
                }
            }
        }
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        pages: Vec<(&'static str, Vec<Vec<u8>>)>,
    }

    impl PageSource for StubSource {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> String {
            self.pages[index].0.to_string()
        }

        fn page_images(&self, index: usize) -> Vec<Vec<u8>> {
            self.pages[index].1.clone()
        }
    }

    #[test]
    fn assemble_preserves_page_order_and_count() {
        let source = StubSource {
            pages: vec![
                ("first", vec![vec![1]]),
                ("second", vec![]),
                ("third", vec![vec![2], vec![3]]),
            ],
        };
        let slides = assemble_slides(&source);
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].text, "first");
        assert_eq!(slides[1].images.len(), 0);
        assert_eq!(slides[2].images, vec![vec![2], vec![3]]);
    }

    #[test]
    fn assemble_keeps_fully_empty_pages() {
        let source = StubSource {
            pages: vec![("", vec![]), ("body", vec![])],
        };
        let slides = assemble_slides(&source);
        assert_eq!(slides.len(), 2);
        assert!(slides[0].is_empty());
    }

    #[test]
    fn assemble_empty_document() {
        let source = StubSource { pages: vec![] };
        assert!(assemble_slides(&source).is_empty());
    }
}
