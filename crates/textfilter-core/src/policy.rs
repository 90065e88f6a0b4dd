//! Character policy: which characters survive cleaning and which count
//! toward special-character density.
//!
//! Both sets are process-wide and built once.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Punctuation kept verbatim alongside ASCII letters, digits and space.
const ALLOWED_PUNCTUATION: &str = ".,?!\"':;() ";

/// Symbols counted toward density.
const SPECIAL_SYMBOLS: &str = "@$#%^&{}[]|\\/<>~";

static STANDARD: LazyLock<CharacterPolicy> = LazyLock::new(|| {
    let allowed = ('A'..='Z')
        .chain('a'..='z')
        .chain('0'..='9')
        .chain(ALLOWED_PUNCTUATION.chars())
        .collect();
    let special = SPECIAL_SYMBOLS.chars().collect();
    CharacterPolicy { allowed, special }
});

/// The allowed and special character sets.
///
/// The two sets are disjoint. Anything outside `allowed` is replaced during
/// cleaning, whether or not it is special.
#[derive(Debug, Clone)]
pub struct CharacterPolicy {
    allowed: HashSet<char>,
    special: HashSet<char>,
}

impl CharacterPolicy {
    /// The shared standard policy.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Returns `true` if `c` is retained by the cleaner.
    pub fn is_allowed(&self, c: char) -> bool {
        self.allowed.contains(&c)
    }

    /// Returns `true` if `c` counts toward special-character density.
    pub fn is_special(&self, c: char) -> bool {
        self.special.contains(&c)
    }

    /// Number of special characters in `text`.
    pub fn count_special(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.is_special(c)).count()
    }
}

/// Shorthand for [`CharacterPolicy::standard`]`().is_allowed(c)`.
pub fn is_allowed(c: char) -> bool {
    STANDARD.is_allowed(c)
}

/// Shorthand for [`CharacterPolicy::standard`]`().is_special(c)`.
pub fn is_special(c: char) -> bool {
    STANDARD.is_special(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_are_disjoint() {
        let policy = CharacterPolicy::standard();
        assert!(policy.allowed.is_disjoint(&policy.special));
    }

    #[test]
    fn letters_digits_and_punctuation_allowed() {
        for c in "azAZ09.,?!\"':;() ".chars() {
            assert!(is_allowed(c), "{c:?} should be allowed");
        }
    }

    #[test]
    fn other_characters_not_allowed() {
        for c in ['-', '_', '*', '\n', '\t', 'é', '@', '~'] {
            assert!(!is_allowed(c), "{c:?} should not be allowed");
        }
    }

    #[test]
    fn special_set_is_fixed() {
        assert_eq!(CharacterPolicy::standard().special.len(), 16);
        assert!(is_special('\\'));
        assert!(is_special('~'));
        assert!(!is_special('-'));
        assert!(!is_special('!'));
    }

    #[test]
    fn counts_special() {
        assert_eq!(CharacterPolicy::standard().count_special("a@b#c-d"), 2);
        assert_eq!(CharacterPolicy::standard().count_special(""), 0);
    }
}
