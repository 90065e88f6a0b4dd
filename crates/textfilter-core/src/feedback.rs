//! Feedback ratings and the responses to them.

use std::num::IntErrorKind;

use serde::Serialize;

use crate::error::FeedbackError;

/// Lowest accepted rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i64 = 5;

/// Category of a valid rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Rating of 1 or 2.
    Apology,
    /// Rating of 3.
    Neutral,
    /// Rating of 4 or 5.
    Thanks,
}

impl Feedback {
    /// Response shown to the user.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Apology => {
                "Sorry for the inconvenience! How can I improve the text filtering process for you?"
            }
            Self::Neutral => "Thank you for your feedback!",
            Self::Thanks => {
                "Thank you! I'm glad you found it helpful. Let me know if you need further improvements!"
            }
        }
    }
}

/// Classify a rating.
pub fn classify(rating: i64) -> Result<Feedback, FeedbackError> {
    match rating {
        MIN_RATING..=2 => Ok(Feedback::Apology),
        3 => Ok(Feedback::Neutral),
        4..=MAX_RATING => Ok(Feedback::Thanks),
        _ => Err(FeedbackError::OutOfRange { rating }),
    }
}

/// Response text for `rating`, with out-of-range ratings answered by their
/// error message.
pub fn respond(rating: i64) -> String {
    match classify(rating) {
        Ok(feedback) => feedback.message().to_string(),
        Err(err) => err.to_string(),
    }
}

/// Parse raw user input into a rating. Surrounding whitespace is ignored.
///
/// Integers too large for `i64` are still numbers: they are reported as out
/// of range, with the rating saturated to `i64::MAX` or `i64::MIN`.
pub fn parse_rating(input: &str) -> Result<i64, FeedbackError> {
    input.trim().parse().map_err(|err: std::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => FeedbackError::OutOfRange { rating: i64::MAX },
        IntErrorKind::NegOverflow => FeedbackError::OutOfRange { rating: i64::MIN },
        _ => FeedbackError::InvalidInput {
            input: input.to_string(),
        },
    })
}

/// Parse and classify raw input, folding both error kinds into their messages.
#[tracing::instrument]
pub fn respond_to_input(input: &str) -> String {
    match parse_rating(input) {
        Ok(rating) => respond(rating),
        Err(err) => {
            tracing::debug!(error = %err, "rating rejected");
            err.to_string()
        }
    }
}
