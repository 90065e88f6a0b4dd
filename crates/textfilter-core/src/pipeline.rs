//! Validate, clean and report in one call.

use crate::clean::clean;
use crate::config::Config;
use crate::error::ValidationError;
use crate::report::{CleaningReport, build_report};
use crate::validate::Validator;

/// A successfully processed input.
#[derive(Debug, Clone)]
pub struct Processed {
    /// Report comparing the input with its cleaned form.
    pub report: CleaningReport,
    /// Non-blocking validation warning, if one was raised.
    pub warning: Option<String>,
}

/// The validation → cleaning → reporting pipeline.
#[derive(Debug, Clone, Default)]
pub struct TextFilter {
    validator: Validator,
}

impl TextFilter {
    /// Create a pipeline around `validator`.
    pub const fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Create a pipeline from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.validator())
    }

    /// The validator in use.
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate `text` and, if it passes, clean it and build the report.
    ///
    /// Nothing is cleaned when validation fails.
    #[tracing::instrument(skip_all)]
    pub fn process(&self, text: Option<&str>) -> Result<Processed, ValidationError> {
        let warning = self.validator.validate(text).into_result()?;
        // validation rejects None
        let original = text.unwrap_or_default();
        let cleaned = clean(original);
        let report = build_report(original, &cleaned);
        tracing::debug!(
            original_chars = original.chars().count(),
            cleaned_chars = cleaned.chars().count(),
            removed = report.removed_chars.len(),
            "text cleaned"
        );
        Ok(Processed { report, warning })
    }
}
