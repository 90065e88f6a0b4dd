//! Tone detection and greeting selection.
//!
//! Rules are checked in priority order and the first rule with any keyword
//! present in the message wins. All keywords live in one Aho-Corasick
//! automaton; each pattern maps back to the rule it came from.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Coarse sender intent, used only to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Polite request.
    Friendly,
    /// Something is broken and the sender is annoyed.
    Frustrated,
    /// Formal wording.
    Formal,
    /// Informal greeting.
    Casual,
    /// No keyword matched.
    Neutral,
}

impl Tone {
    /// Returns the tone as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Frustrated => "frustrated",
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Neutral => "neutral",
        }
    }

    /// Greeting for this tone. `has_text` selects the variant used when the
    /// sender already supplied text to clean.
    pub const fn greeting(&self, has_text: bool) -> &'static str {
        let (with_text, without_text) = match self {
            Self::Friendly => (
                "Hello! I will now clean and improve your text. Let's make it perfect! I'll start the cleaning process now.",
                "Hello! I will now clean and improve your text. Let's make it perfect! Please provide the text so I can start.",
            ),
            Self::Frustrated => (
                "Oops! Let me help you fix it right away. I'll start cleaning the text now. Thank you for your patience!",
                "Oops! Let me help you fix it right away. Could you share the text with me? Thank you for your patience!",
            ),
            Self::Formal => (
                "Hello! I will now clean and improve your text as per your request. Let's ensure it's perfect! I'll proceed with the cleaning now.",
                "Hello! I will now clean and improve your text as per your request. Let's ensure it's perfect! Please provide the text so I can begin.",
            ),
            Self::Casual => (
                "Hey there! I'll clean this up for you and make it look great! Let's do this! I'm ready to start cleaning now.",
                "Hey there! I'll clean this up for you and make it look great! Let's do this! Please provide the text, and I'll get started.",
            ),
            Self::Neutral => (
                "Hello! I will now clean and improve your text. Let's make it perfect! I'll proceed with cleaning now.",
                "Oops! There's a problem with your input. Please share the correct input.",
            ),
        };
        if has_text { with_text } else { without_text }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword rules in priority order.
///
/// `"help!"` can never decide a tone because `"help"` matches first; the
/// order is kept as-is.
const TONE_RULES: &[(Tone, &[&str])] = &[
    (Tone::Friendly, &["please", "thank you", "help"]),
    (Tone::Frustrated, &["help!", "fix", "problem", "mess"]),
    (Tone::Formal, &["kindly", "request"]),
    (Tone::Casual, &["hey", "hi"]),
];

struct KeywordIndex {
    automaton: AhoCorasick,
    /// Rule position for each pattern id.
    rule_of: Vec<usize>,
}

static KEYWORDS: LazyLock<KeywordIndex> = LazyLock::new(|| {
    let mut patterns = Vec::new();
    let mut rule_of = Vec::new();
    for (rule, (_, words)) in TONE_RULES.iter().enumerate() {
        for word in *words {
            patterns.push(*word);
            rule_of.push(rule);
        }
    }
    let automaton = AhoCorasick::new(&patterns).expect("valid keyword patterns");
    KeywordIndex { automaton, rule_of }
});

/// Classify the tone of `message`. Matching is case-insensitive and on
/// substrings, so `"this"` counts as containing `"hi"`.
#[tracing::instrument(skip_all, fields(message_len = message.len()))]
pub fn classify(message: &str) -> Tone {
    let lowered = message.to_lowercase();
    let index = &*KEYWORDS;
    let best = index
        .automaton
        .find_overlapping_iter(&lowered)
        .map(|m| index.rule_of[m.pattern().as_usize()])
        .min();
    let tone = best.map_or(Tone::Neutral, |rule| TONE_RULES[rule].0);
    tracing::debug!(tone = tone.as_str(), "tone classified");
    tone
}

/// Greeting for `tone`; see [`Tone::greeting`].
pub const fn greet(tone: Tone, has_text: bool) -> &'static str {
    tone.greeting(has_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn please_help_is_friendly() {
        assert_eq!(classify("please help"), Tone::Friendly);
    }

    #[test]
    fn help_bang_still_friendly() {
        assert_eq!(classify("HELP!"), Tone::Friendly);
    }

    #[test]
    fn frustrated_keywords() {
        assert_eq!(classify("Fix this mess now"), Tone::Frustrated);
        assert_eq!(classify("there is a problem"), Tone::Frustrated);
    }

    #[test]
    fn formal_keywords() {
        assert_eq!(classify("I kindly REQUEST a cleanup"), Tone::Formal);
    }

    #[test]
    fn casual_keywords() {
        assert_eq!(classify("hey"), Tone::Casual);
        assert_eq!(classify("Hi"), Tone::Casual);
    }

    #[test]
    fn substring_match() {
        // "this" contains "hi"
        assert_eq!(classify("clean this"), Tone::Casual);
    }

    #[test]
    fn priority_beats_position() {
        // casual keyword appears first, friendly rule still wins
        assert_eq!(classify("hey, thank you"), Tone::Friendly);
        // formal before frustrated in the text, frustrated has priority
        assert_eq!(classify("kindly fix it"), Tone::Frustrated);
    }

    #[test]
    fn no_match_is_neutral() {
        assert_eq!(classify("clean up my words"), Tone::Neutral);
        assert_eq!(classify(""), Tone::Neutral);
    }

    #[test]
    fn greetings_differ_by_text_presence() {
        for tone in [
            Tone::Friendly,
            Tone::Frustrated,
            Tone::Formal,
            Tone::Casual,
            Tone::Neutral,
        ] {
            assert_ne!(greet(tone, true), greet(tone, false));
        }
        assert_eq!(
            greet(Tone::Neutral, false),
            "Oops! There's a problem with your input. Please share the correct input."
        );
        assert!(greet(Tone::Casual, true).starts_with("Hey there!"));
    }
}
