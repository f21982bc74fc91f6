//! Error types for the page controllers.
//!
//! Nothing here is fatal to the page: every variant degrades a single feature.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::behavior::contact::{SubmitError, ValidationError};

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    // ─────────────────────────────────────────────────────────────
    // Browser environment
    // ─────────────────────────────────────────────────────────────
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Document is not available")]
    NoDocument,

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    // ─────────────────────────────────────────────────────────────
    // Contact form
    // ─────────────────────────────────────────────────────────────
    #[error("Form rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmitError),
}

impl SiteError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }

    /// Whether the visitor is told about this error through a toast.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Submission(_))
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::contact::{Field, FieldError};

    #[test]
    fn test_error_display_messages() {
        let err = SiteError::missing(".testimonials__slider");
        assert_eq!(err.to_string(), "Element not found: .testimonials__slider");

        let err = SiteError::NoWindow;
        assert!(err.to_string().contains("window"));
    }

    #[test]
    fn test_user_facing_errors() {
        let validation = ValidationError {
            errors: vec![(Field::Email, FieldError::InvalidEmail)],
        };
        assert!(SiteError::from(validation).is_user_facing());
        assert!(SiteError::from(SubmitError::Rejected("offline".into())).is_user_facing());
        assert!(!SiteError::NoDocument.is_user_facing());
        assert!(!SiteError::Dom("boom".into()).is_user_facing());
    }
}
