//! Configuration for the scrub pipeline.
//!
//! All behaviour is controlled through [`ScrubConfig`], built via its
//! [`ScrubConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across threads, serialise them for logging,
//! and diff two runs to understand why their outputs differ.
//!
//! Thresholds are validated eagerly: each filter compares a fraction of
//! slides (or pixels) against its threshold, so any value outside
//! `0.0..=1.0` — or a NaN — would silently turn a filter into a no-op or
//! an everything-remover. [`ScrubConfigBuilder::build`] and every pipeline
//! entry point reject such values before any page is touched.

use crate::error::ScrubError;
use serde::{Deserialize, Serialize};

/// Configuration for a scrub run.
///
/// Built via [`ScrubConfig::builder()`] or using
/// [`ScrubConfig::default()`].
///
/// # Example
/// ```rust
/// use slidescrub::ScrubConfig;
///
/// let config = ScrubConfig::builder()
///     .image_common_threshold(0.85)
///     .phrase_common_threshold(0.75)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Fraction of slides an identical image must appear on to be removed
    /// as boilerplate. Range: 0.0–1.0. Default: 0.9.
    ///
    /// The comparison is inclusive: an image on exactly this fraction of
    /// slides is removed. 0.9 catches logos and watermarks stamped on
    /// every content slide while sparing title/backup pages that omit
    /// them. Lower it for decks that vary their template per section;
    /// set it to 1.0 to remove only images present on every single slide.
    pub image_common_threshold: f64,

    /// Fraction of slides a trimmed text line must appear on to be removed
    /// as a header/footer. Range: 0.0–1.0. Default: 0.8.
    ///
    /// The comparison is strict: a line on exactly this fraction of slides
    /// is kept. Headers and footers usually survive template edits less
    /// reliably than images do, hence the looser default relative to
    /// `image_common_threshold`.
    pub phrase_common_threshold: f64,

    /// Fraction of pixels that must share one colour for an image to be
    /// dropped as a blank placeholder. Range: 0.0–1.0. Default: 0.95.
    ///
    /// The comparison is inclusive. 0.95 removes solid bars and empty
    /// picture frames while keeping line charts, which rarely exceed 90%
    /// background even when mostly white.
    pub uniform_threshold: f64,

    /// Password for encrypted source documents. Only consulted by the
    /// pdfium-backed entry points; ignored for caller-supplied sources.
    pub password: Option<String>,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            image_common_threshold: 0.9,
            phrase_common_threshold: 0.8,
            uniform_threshold: 0.95,
            password: None,
        }
    }
}

impl ScrubConfig {
    /// Create a new builder for `ScrubConfig`.
    pub fn builder() -> ScrubConfigBuilder {
        ScrubConfigBuilder {
            config: Self::default(),
        }
    }

    /// Validate all thresholds, rejecting values outside `0.0..=1.0`.
    ///
    /// Called by [`ScrubConfigBuilder::build`] and by every pipeline entry
    /// point, so configs constructed literally are checked too.
    pub fn validate(&self) -> Result<(), ScrubError> {
        check_fraction("image_common_threshold", self.image_common_threshold)?;
        check_fraction("phrase_common_threshold", self.phrase_common_threshold)?;
        check_fraction("uniform_threshold", self.uniform_threshold)?;
        Ok(())
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), ScrubError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ScrubError::InvalidConfig(format!(
            "{name} must be within 0.0..=1.0, got {value}"
        )));
    }
    Ok(())
}

/// Builder for [`ScrubConfig`].
#[derive(Debug)]
pub struct ScrubConfigBuilder {
    config: ScrubConfig,
}

impl ScrubConfigBuilder {
    pub fn image_common_threshold(mut self, t: f64) -> Self {
        self.config.image_common_threshold = t;
        self
    }

    pub fn phrase_common_threshold(mut self, t: f64) -> Self {
        self.config.phrase_common_threshold = t;
        self
    }

    pub fn uniform_threshold(mut self, t: f64) -> Self {
        self.config.uniform_threshold = t;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    /// Build the configuration, validating all thresholds.
    pub fn build(self) -> Result<ScrubConfig, ScrubError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = ScrubConfig::default();
        assert_eq!(c.image_common_threshold, 0.9);
        assert_eq!(c.phrase_common_threshold, 0.8);
        assert_eq!(c.uniform_threshold, 0.95);
        assert!(c.password.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_accepts_inclusive_bounds() {
        let c = ScrubConfig::builder()
            .image_common_threshold(1.0)
            .phrase_common_threshold(0.0)
            .uniform_threshold(1.0)
            .build()
            .unwrap();
        assert_eq!(c.image_common_threshold, 1.0);
        assert_eq!(c.phrase_common_threshold, 0.0);
    }

    #[test]
    fn builder_rejects_out_of_range() {
        assert!(ScrubConfig::builder()
            .image_common_threshold(1.5)
            .build()
            .is_err());
        assert!(ScrubConfig::builder()
            .phrase_common_threshold(-0.1)
            .build()
            .is_err());
        assert!(ScrubConfig::builder()
            .uniform_threshold(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn validate_catches_literal_construction() {
        let c = ScrubConfig {
            uniform_threshold: 2.0,
            ..ScrubConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("uniform_threshold"));
    }
}
