//! Filter stages for boilerplate removal.
//!
//! Each submodule implements exactly one document-wide filter. Keeping
//! stages separate makes each independently testable and lets callers
//! reason about one threshold at a time.
//!
//! ## Data Flow
//!
//! ```text
//! slides ──▶ dedup_images ──▶ dedup_phrases ──▶ uniform
//!            (repeated       (repeated          (single-colour
//!             logos)          headers/footers)   placeholders)
//! ```
//!
//! 1. [`dedup_images`]  — drop images whose byte-identical content recurs
//!    on at least `image_common_threshold` of all slides
//! 2. [`dedup_phrases`] — drop trimmed text lines recurring on more than
//!    `phrase_common_threshold` of all slides
//! 3. [`uniform`]       — decode each remaining image and drop it when a
//!    single colour covers `uniform_threshold` of its pixels
//!
//! The order is load-bearing: the uniformity stage decodes only images
//! that survived deduplication, so reordering changes both the output and
//! the amount of decode work. Every stage preserves the slide count and
//! the relative order of whatever it keeps.

pub mod dedup_images;
pub mod dedup_phrases;
pub mod uniform;
