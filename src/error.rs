//! Error types for the slidescrub library.
//!
//! Only two kinds of failure are fatal: a configuration that makes no
//! sense (a threshold outside `0.0..=1.0`) and the inability to open the
//! source document at all. Everything else degrades locally by design:
//!
//! * Page-level extraction failures surface as empty text / an empty
//!   image list inside the affected [`crate::Slide`], so one bad page
//!   never loses the rest of the document.
//! * Per-image decode failures during the uniformity pass are logged and
//!   resolved by the drop-on-error policy in
//!   [`crate::pipeline::uniform`].
//!
//! The pipeline therefore always returns a slide sequence of the same
//! length it assembled, or a fatal error before any processing began.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the slidescrub library.
#[derive(Debug, Error)]
pub enum ScrubError {
    /// A threshold or other configuration value failed validation.
    ///
    /// Raised before any page is touched; a bad threshold silently
    /// producing nonsense output would be far worse than failing here.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The source document could not be opened from a file path.
    #[error("Failed to open document '{path}': {detail}")]
    DocumentOpen { path: PathBuf, detail: String },

    /// The source document could not be opened from an in-memory buffer.
    #[error("Failed to open document from memory: {detail}")]
    DocumentOpenBytes { detail: String },

    /// The document is password-protected and no (or a wrong) password
    /// was supplied.
    #[error("Document '{path}' is encrypted; supply the password via ScrubConfig")]
    PasswordRequired { path: PathBuf },

    /// No pdfium library could be bound at runtime.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
         Install pdfium alongside the executable or as a system library; \
         see the pdfium-render documentation for obtaining a binary."
    )]
    PdfiumBindingFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let e = ScrubError::InvalidConfig("image_common_threshold must be within 0.0..=1.0, got 1.5".into());
        assert!(e.to_string().contains("1.5"));
    }

    #[test]
    fn pdfium_binding_failed_display() {
        let e = ScrubError::PdfiumBindingFailed("library not found".into());
        assert!(e.to_string().contains("library not found"));
    }

    #[test]
    fn document_open_display_includes_path() {
        let e = ScrubError::DocumentOpen {
            path: PathBuf::from("deck.pdf"),
            detail: "no such file".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("deck.pdf"), "got: {msg}");
        assert!(msg.contains("no such file"), "got: {msg}");
    }
}
