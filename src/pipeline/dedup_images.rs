//! Image deduplication: remove images that recur across most slides.
//!
//! Logos, watermarks, and template artwork are embedded with identical
//! bytes on page after page, while genuine figures appear once or twice.
//! Counting, per distinct image content, the number of *slides* carrying
//! it (not raw occurrences — a logo stamped twice on one slide still
//! counts that slide once) separates the two cleanly.
//!
//! Content identity is an MD5 digest of the raw bytes, used purely for
//! equality grouping; no perceptual matching is attempted. Two passes:
//! pass one builds the frequency table, pass two filters each slide's
//! image list against the flagged digests with read-only lookups.

use crate::slide::Slide;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Equality key for raw image bytes.
type ImageDigest = [u8; 16];

fn digest(bytes: &[u8]) -> ImageDigest {
    md5::compute(bytes).0
}

/// Remove every occurrence of images present on at least
/// `threshold` (a fraction, inclusive comparison) of all slides.
///
/// Slide count and the order of surviving images are preserved. With a
/// single-slide document and a threshold below 1.0 every image is
/// flagged, so single-page callers normally want `threshold = 1.0` here.
pub fn remove_common_images(slides: &mut [Slide], threshold: f64) {
    let total_slides = slides.len();
    if total_slides == 0 {
        return;
    }

    // Pass one: how many slides contain each image content at least once.
    let mut slide_counts: HashMap<ImageDigest, usize> = HashMap::new();
    for slide in slides.iter() {
        let mut seen_on_slide: HashSet<ImageDigest> = HashSet::new();
        for image in &slide.images {
            let d = digest(image);
            if seen_on_slide.insert(d) {
                *slide_counts.entry(d).or_insert(0) += 1;
            }
        }
    }

    let threshold_count = total_slides as f64 * threshold;
    let common: HashSet<ImageDigest> = slide_counts
        .iter()
        .filter(|(_, &count)| count as f64 >= threshold_count)
        .map(|(&d, _)| d)
        .collect();

    if common.is_empty() {
        return;
    }

    // Pass two: drop every physical occurrence of a flagged image.
    let mut removed = 0usize;
    for slide in slides.iter_mut() {
        let before = slide.images.len();
        slide.images.retain(|image| !common.contains(&digest(image)));
        removed += before - slide.images.len();
    }

    debug!(
        distinct_flagged = common.len(),
        occurrences_removed = removed,
        total_slides,
        "removed common images"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides_with_images(images_per_slide: Vec<Vec<Vec<u8>>>) -> Vec<Slide> {
        images_per_slide
            .into_iter()
            .map(|images| Slide::new("", images))
            .collect()
    }

    fn blob(tag: u8) -> Vec<u8> {
        vec![tag; 32]
    }

    #[test]
    fn image_on_nine_of_ten_slides_removed_at_point_nine() {
        let logo = blob(1);
        let chart = blob(2);
        let mut images: Vec<Vec<Vec<u8>>> = (0..9).map(|_| vec![logo.clone()]).collect();
        images.push(vec![chart.clone()]);
        let mut slides = slides_with_images(images);

        remove_common_images(&mut slides, 0.9);

        assert_eq!(slides.len(), 10);
        for slide in &slides[..9] {
            assert!(slide.images.is_empty(), "logo should be gone");
        }
        assert_eq!(slides[9].images, vec![chart], "unique chart kept");
    }

    #[test]
    fn image_on_eight_of_ten_slides_kept_at_point_nine() {
        let banner = blob(3);
        let mut images: Vec<Vec<Vec<u8>>> = (0..8).map(|_| vec![banner.clone()]).collect();
        images.push(vec![]);
        images.push(vec![]);
        let mut slides = slides_with_images(images);

        remove_common_images(&mut slides, 0.9);

        assert_eq!(slides.iter().map(Slide::image_count).sum::<usize>(), 8);
    }

    #[test]
    fn duplicate_on_one_slide_counts_that_slide_once() {
        // Image on 1 of 2 slides (twice on that slide): 1/2 < 0.9, kept.
        let decoration = blob(4);
        let mut slides = slides_with_images(vec![
            vec![decoration.clone(), decoration.clone()],
            vec![],
        ]);

        remove_common_images(&mut slides, 0.9);

        assert_eq!(slides[0].images.len(), 2, "both physical copies kept");
    }

    #[test]
    fn all_occurrences_of_flagged_image_removed() {
        // Image on 2 of 2 slides, one of them twice: every copy goes.
        let logo = blob(5);
        let figure = blob(6);
        let mut slides = slides_with_images(vec![
            vec![logo.clone(), figure.clone(), logo.clone()],
            vec![logo.clone()],
        ]);

        remove_common_images(&mut slides, 0.9);

        assert_eq!(slides[0].images, vec![figure]);
        assert!(slides[1].images.is_empty());
    }

    #[test]
    fn order_of_survivors_preserved() {
        let logo = blob(7);
        let a = blob(8);
        let b = blob(9);
        let mut slides = slides_with_images(vec![
            vec![a.clone(), logo.clone(), b.clone()],
            vec![logo.clone()],
        ]);

        remove_common_images(&mut slides, 0.9);

        assert_eq!(slides[0].images, vec![a, b]);
    }

    #[test]
    fn threshold_of_one_spares_partial_coverage() {
        let banner = blob(10);
        let mut slides = slides_with_images(vec![vec![banner.clone()], vec![]]);
        remove_common_images(&mut slides, 1.0);
        assert_eq!(slides[0].images.len(), 1);

        // On every slide: removed even at 1.0.
        let mut slides = slides_with_images(vec![vec![banner.clone()], vec![banner.clone()]]);
        remove_common_images(&mut slides, 1.0);
        assert!(slides.iter().all(|s| s.images.is_empty()));
    }

    #[test]
    fn empty_document_is_a_no_op() {
        let mut slides: Vec<Slide> = Vec::new();
        remove_common_images(&mut slides, 0.9);
        assert!(slides.is_empty());
    }
}
