//! Cleaning reports: what the cleaner found and what it changed.
//!
//! A [`CleaningReport`] is derived entirely from the original and cleaned
//! texts. [`CleaningReport::to_markdown`] renders the fixed-order document.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clean::{WHITESPACE_CLASS, exclamation_runs, whitespace_runs};
use crate::policy::CharacterPolicy;
use crate::validate::compute_density;

/// Whitespace runs of two or more characters.
static EXTRA_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{WHITESPACE_CLASS}{{2,}}")).expect("valid regex"));

const FEEDBACK_PROMPT: &str = "Please rate the text filtering process (1-5 stars): ⭐⭐⭐⭐⭐";

/// Comparison of an original text with its cleaned form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CleaningReport {
    /// Input as supplied.
    pub original_text: String,
    /// Output of the cleaner.
    pub cleaned_text: String,
    /// Special characters in the original.
    pub special_char_count: usize,
    /// Whitespace runs of length two or more in the original.
    pub extra_space_count: usize,
    /// Whether the original contains any uppercase letter.
    pub has_uppercase: bool,
    /// Special-character density of the original (0–100).
    pub density: f64,
    /// Distinct disallowed characters of the original, in first-seen order.
    pub removed_chars: Vec<char>,
    /// Whitespace runs in the original.
    pub space_count_before: usize,
    /// Whitespace runs in the cleaned text.
    pub space_count_after: usize,
    /// `!` runs in the original.
    pub exclamation_count_before: usize,
    /// Individual `!` marks in the cleaned text.
    pub exclamation_count_after: usize,
}

/// Compare `original` with `cleaned` and collect the report fields.
#[tracing::instrument(skip_all, fields(original_len = original.len(), cleaned_len = cleaned.len()))]
pub fn build_report(original: &str, cleaned: &str) -> CleaningReport {
    let policy = CharacterPolicy::standard();

    let removed: IndexSet<char> = original.chars().filter(|&c| !policy.is_allowed(c)).collect();

    let report = CleaningReport {
        original_text: original.to_string(),
        cleaned_text: cleaned.to_string(),
        special_char_count: policy.count_special(original),
        extra_space_count: EXTRA_SPACE.find_iter(original).count(),
        has_uppercase: original.chars().any(char::is_uppercase),
        density: compute_density(original),
        removed_chars: removed.into_iter().collect(),
        space_count_before: whitespace_runs(original),
        space_count_after: whitespace_runs(cleaned),
        exclamation_count_before: exclamation_runs(original),
        exclamation_count_after: cleaned.matches('!').count(),
    };
    tracing::debug!(
        removed = report.removed_chars.len(),
        density = report.density,
        "report built"
    );
    report
}

impl CleaningReport {
    /// Whether any disallowed characters were removed.
    pub fn removed_any(&self) -> bool {
        !self.removed_chars.is_empty()
    }

    /// Whether cleaning changed the number of whitespace runs.
    pub fn spaces_fixed(&self) -> bool {
        self.space_count_before != self.space_count_after
    }

    /// Whether the exclamation count differs between the two texts.
    pub fn exclamations_reduced(&self) -> bool {
        self.exclamation_count_before != self.exclamation_count_after
    }

    /// Render the report as a markdown document.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

/// The fixed-order markdown document.
impl std::fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("# Text Cleaning Report\n\n")?;

        f.write_str("## Validation Report\n")?;
        writeln!(f, "- Special Characters Found: {}", self.special_char_count)?;
        writeln!(f, "- Extra Spaces Detected: {}", self.extra_space_count)?;
        let case = if self.has_uppercase {
            "Preserved"
        } else {
            "No uppercase letters found"
        };
        writeln!(f, "- Sentence Case: {case}\n")?;

        f.write_str("## Density Report\n")?;
        writeln!(f, "Special character density: {:.2}%\n", self.density)?;

        f.write_str("## Original Text\n")?;
        writeln!(f, "```\n{}\n```\n", self.original_text)?;
        f.write_str("## Cleaned Text\n")?;
        writeln!(f, "```\n{}\n```\n", self.cleaned_text)?;

        f.write_str("## Step-by-Step Fixes Applied\n")?;
        if self.removed_any() {
            let list = self
                .removed_chars
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "- Special Characters Removed: <font color='red'>{list}</font>"
            )?;
        }
        if self.spaces_fixed() {
            writeln!(
                f,
                "- Fixed Extra Spaces: <font color='orange'>{} spaces → {} spaces</font>",
                self.space_count_before, self.space_count_after
            )?;
        }
        if self.exclamations_reduced() {
            writeln!(
                f,
                "- Reduced Exclamation Marks: {} → {}",
                self.exclamation_count_before, self.exclamation_count_after
            )?;
        }

        f.write_str("\n## Feedback\n")?;
        writeln!(f, "{FEEDBACK_PROMPT}")?;
        Ok(())
    }
}
