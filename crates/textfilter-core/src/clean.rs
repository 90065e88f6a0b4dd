//! Text cleaning.
//!
//! Steps, in order:
//! 1. every disallowed character becomes one space
//! 2. whitespace runs collapse to one space
//! 3. runs of `!`, then `?`, then `.` collapse to one mark
//! 4. leading and trailing whitespace is trimmed

use std::sync::LazyLock;

use regex::Regex;

use crate::policy::CharacterPolicy;

/// Whitespace, including the ASCII information separators `\x1c`..`\x1f`.
pub(crate) const WHITESPACE_CLASS: &str = r"[\s\x1c-\x1f]";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{WHITESPACE_CLASS}+")).expect("valid regex"));

static EXCLAMATION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!+").expect("valid regex"));

static QUESTION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?+").expect("valid regex"));

static PERIOD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+").expect("valid regex"));

/// Clean `text` into normalized form. Pure and deterministic.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn clean(text: &str) -> String {
    let policy = CharacterPolicy::standard();
    let replaced: String = text
        .chars()
        .map(|c| if policy.is_allowed(c) { c } else { ' ' })
        .collect();

    let collapsed = WHITESPACE_RUN.replace_all(&replaced, " ");
    let collapsed = EXCLAMATION_RUN.replace_all(&collapsed, "!");
    let collapsed = QUESTION_RUN.replace_all(&collapsed, "?");
    let collapsed = PERIOD_RUN.replace_all(&collapsed, ".");

    collapsed.trim().to_string()
}

/// Number of whitespace runs (of any length) in `text`.
pub(crate) fn whitespace_runs(text: &str) -> usize {
    WHITESPACE_RUN.find_iter(text).count()
}

/// Number of `!` runs in `text`.
pub(crate) fn exclamation_runs(text: &str) -> usize {
    EXCLAMATION_RUN.find_iter(text).count()
}
