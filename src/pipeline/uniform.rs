//! Uniformity filter: remove images dominated by a single colour.
//!
//! Blank picture placeholders, solid divider bars, and empty template
//! frames decode to rasters where one colour covers nearly every pixel.
//! Real photographs and charts never do. Each image is judged in
//! isolation: decode, flatten to RGB (alpha discarded), count colour
//! occurrences, and compare the most frequent colour's share of the
//! pixels against the threshold.
//!
//! An image that cannot be decoded is treated as uniform and dropped:
//! a conservative policy that prefers losing an unreadable blob over
//! aborting the document or passing junk downstream. The failure is
//! logged at `warn` and processing continues.

use crate::slide::Slide;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Share of pixels occupied by the image's single most frequent colour,
/// in `0.0..=1.0`. Zero-pixel images count as fully uniform.
fn uniformity(pixels: &image::RgbImage) -> f64 {
    let total = pixels.width() as usize * pixels.height() as usize;
    if total == 0 {
        return 1.0;
    }

    let mut colour_counts: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in pixels.pixels() {
        *colour_counts.entry(pixel.0).or_insert(0) += 1;
    }
    let most_common = colour_counts.values().copied().max().unwrap_or(0);

    most_common as f64 / total as f64
}

/// True when the blob should be dropped: decodes to a raster whose
/// dominant colour covers at least `threshold` of the pixels (inclusive),
/// decodes to zero pixels, or fails to decode at all.
fn is_uniform(bytes: &[u8], threshold: f64) -> bool {
    let decoded = match image::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(error = %e, len = bytes.len(), "image decode failed, dropping as uniform");
            return true;
        }
    };

    uniformity(&decoded.to_rgb8()) >= threshold
}

/// Drop every image whose pixel content is at least `threshold` one
/// colour. Runs after deduplication, so only surviving images are
/// decoded. Slide count and the order of kept images are preserved.
pub fn remove_uniform_images(slides: &mut [Slide], threshold: f64) {
    let mut removed = 0usize;
    for slide in slides.iter_mut() {
        let before = slide.images.len();
        slide.images.retain(|image| !is_uniform(image, threshold));
        removed += before - slide.images.len();
    }

    debug!(images_removed = removed, "removed uniform images");
}
