//! # slidescrub
//!
//! Turn a paginated document into per-page slide records (text + embedded
//! images) and strip the content that is boilerplate rather than
//! substance: logos and watermarks repeated across the deck, header and
//! footer lines stamped on every page, and blank placeholder images.
//!
//! ## Why this crate?
//!
//! Downstream consumers of slide decks — search indexing, summarisation,
//! LLM ingestion — choke on repetition. A 40-page deck with a logo and a
//! "Confidential" footer on every page carries 40 identical images and 40
//! identical lines that say nothing about the content. slidescrub removes
//! exactly that, using document-wide frequency statistics rather than any
//! hardcoded notion of what a logo looks like.
//!
//! ## Pipeline Overview
//!
//! ```text
//! document
//!  │
//!  ├─ 1. Assemble       one Slide (text + image bytes) per page
//!  ├─ 2. Dedup images   drop images on ≥ 90% of slides (byte-identical)
//!  ├─ 3. Dedup phrases  drop trimmed lines on > 80% of slides
//!  └─ 4. Uniformity     drop images that are ≥ 95% one colour
//! ```
//!
//! All thresholds are configurable via [`ScrubConfig`]. Every stage
//! preserves the slide count and slide order; filters only remove images
//! within a slide or lines within its text. The stage order is fixed:
//! uniformity runs last so it only decodes images that survived
//! deduplication.
//!
//! ## Quick Start
//!
//! ```rust
//! use slidescrub::{scrub_slides, ScrubConfig, Slide};
//!
//! # fn main() -> Result<(), slidescrub::ScrubError> {
//! let slides = vec![
//!     Slide::new("Q3 results\nACME Corp", Vec::new()),
//!     Slide::new("Roadmap\nACME Corp", Vec::new()),
//! ];
//! let cleaned = scrub_slides(slides, &ScrubConfig::default())?;
//! assert_eq!(cleaned.len(), 2);
//! assert_eq!(cleaned[0].text, "Q3 results"); // footer removed
//! # Ok(())
//! # }
//! ```
//!
//! To process a PDF directly (feature `pdfium`, on by default):
//!
//! ```rust,no_run
//! # #[allow(dead_code)]
//! # #[cfg(feature = "pdfium")]
//! # fn example() -> Result<(), slidescrub::ScrubError> {
//! use slidescrub::{scrub_pdf, ScrubConfig};
//!
//! let slides = scrub_pdf("deck.pdf", &ScrubConfig::default())?;
//! for (i, slide) in slides.iter().enumerate() {
//!     println!("page {}: {} images", i + 1, slide.image_count());
//! }
//! # Ok(())
//! # }
//! # fn main() {}
//! ```
//!
//! Any other page format plugs in through the [`PageSource`] trait.
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `pdfium` | on      | Bundled [`PdfiumSource`] and the `scrub_pdf*` entry points |
//!
//! Disable `pdfium` when supplying your own [`PageSource`]:
//! ```toml
//! slidescrub = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod scrub;
pub mod slide;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ScrubConfig, ScrubConfigBuilder};
pub use error::ScrubError;
pub use extract::{assemble_slides, PageSource};
pub use scrub::{scrub, scrub_slides};
pub use slide::Slide;

#[cfg(feature = "pdfium")]
pub use extract::PdfiumSource;
#[cfg(feature = "pdfium")]
pub use scrub::{scrub_pdf, scrub_pdf_bytes};
