//! Phrase deduplication: remove text lines that recur across most slides.
//!
//! Headers, footers, and classification banners repeat verbatim on nearly
//! every page; body text does not. Lines are compared after trimming
//! leading/trailing whitespace, and counted per *slide* — a footer that
//! appears twice on one page still counts that page once. Blank lines are
//! never counted and never removed; they keep vertical structure intact.
//!
//! This is a whole-line filter: a header merged into a longer line is not
//! detected, and no substring or n-gram matching is attempted.

use crate::slide::Slide;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Remove every line whose trimmed form appears on strictly more than
/// `threshold` (a fraction) of all slides.
///
/// Surviving lines keep their original untrimmed text, and blank lines
/// pass through verbatim. Note the strict inequality: a line on exactly
/// the threshold fraction of slides is kept, unlike the inclusive
/// comparison used for images.
pub fn remove_common_phrases(slides: &mut [Slide], threshold: f64) {
    let total_slides = slides.len();
    if total_slides == 0 {
        return;
    }

    // Pass one: how many slides contain each trimmed line at least once.
    let mut slide_counts: HashMap<&str, usize> = HashMap::new();
    for slide in slides.iter() {
        let mut seen_on_slide: HashSet<&str> = HashSet::new();
        for line in slide.text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen_on_slide.insert(trimmed) {
                *slide_counts.entry(trimmed).or_insert(0) += 1;
            }
        }
    }

    let common: HashSet<String> = slide_counts
        .into_iter()
        .filter(|(_, count)| *count as f64 / total_slides as f64 > threshold)
        .map(|(line, _)| line.to_string())
        .collect();

    if common.is_empty() {
        return;
    }

    // Pass two: rebuild each slide's text without the flagged lines.
    let mut removed = 0usize;
    for slide in slides.iter_mut() {
        let kept: Vec<&str> = slide
            .text
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                let keep = trimmed.is_empty() || !common.contains(trimmed);
                if !keep {
                    removed += 1;
                }
                keep
            })
            .collect();
        slide.text = kept.join("\n");
    }

    debug!(
        distinct_flagged = common.len(),
        lines_removed = removed,
        total_slides,
        "removed common phrases"
    );
}
