//! Input validation and special-character density.
//!
//! Validation is all-or-nothing: a failed [`ValidationResult`] means the
//! text must not be cleaned. The high-density warning never blocks; when
//! enabled it only attaches a message to a passing result.

use serde::Serialize;

use crate::error::ValidationError;
use crate::policy::CharacterPolicy;

/// Default character ceiling for input text.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

/// Default density (percent) above which the warning fires.
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 5.0;

/// Percentage of characters in `text` that belong to the special set.
///
/// Returns `0.0` for empty text. Lengths are counted in characters, not bytes.
pub fn compute_density(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let special = CharacterPolicy::standard().count_special(text);
    special as f64 / total as f64 * 100.0
}

/// Outcome of [`Validator::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether cleaning may proceed.
    pub ok: bool,
    /// User-facing message: the error when `ok` is false, an optional warning
    /// otherwise, empty when there is nothing to say.
    pub message: String,
    /// Special-character density of the input (0 when rejected as empty).
    pub density: f64,
    /// The rejection reason when `ok` is false.
    #[serde(skip)]
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    fn passed(density: f64, message: String) -> Self {
        Self {
            ok: true,
            message,
            density,
            error: None,
        }
    }

    fn failed(error: ValidationError) -> Self {
        Self {
            ok: false,
            message: error.to_string(),
            density: 0.0,
            error: Some(error),
        }
    }

    /// Returns the warning message of a passing result, if any.
    pub fn warning(&self) -> Option<&str> {
        (self.ok && !self.message.is_empty()).then_some(self.message.as_str())
    }

    /// Converts into a `Result`, yielding the optional warning on success.
    pub fn into_result(self) -> Result<Option<String>, ValidationError> {
        match self.error {
            Some(err) => Err(err),
            None if self.message.is_empty() => Ok(None),
            None => Ok(Some(self.message)),
        }
    }
}

/// Enforces input constraints before cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    /// Maximum number of characters accepted.
    pub max_length: usize,
    /// Attach a warning to results whose density exceeds the threshold.
    pub warn_on_high_density: bool,
    /// Density percentage that triggers the warning.
    pub density_threshold: f64,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            warn_on_high_density: false,
            density_threshold: DEFAULT_DENSITY_THRESHOLD,
        }
    }
}

impl Validator {
    /// Validate raw input. `None` is treated like empty text.
    #[tracing::instrument(skip_all, fields(text_len = ?text.map(str::len)))]
    pub fn validate(&self, text: Option<&str>) -> ValidationResult {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return ValidationResult::failed(ValidationError::EmptyInput),
        };

        let length = text.chars().count();
        if length > self.max_length {
            tracing::debug!(length, max = self.max_length, "input rejected as too long");
            return ValidationResult::failed(ValidationError::TooLong {
                length,
                max: self.max_length,
            });
        }

        let density = compute_density(text);
        if self.warn_on_high_density && density > self.density_threshold {
            tracing::debug!(
                density,
                threshold = self.density_threshold,
                "high special-character density"
            );
            return ValidationResult::passed(
                density,
                format!(
                    "WARNING: High number of special characters found ({density:.2}%). Proceed with cleaning? (Yes/No)"
                ),
            );
        }

        ValidationResult::passed(density, String::new())
    }
}
