//! Lexical red-flag indicators.
//!
//! Heuristic checks over the *raw* article text. They intentionally run
//! before normalization: casing and punctuation are part of the signal.
//! All checks are pure and infallible - a flag that cannot be evaluated
//! is reported as false.

use serde::{Deserialize, Serialize};

// ============================================================================
// VOCABULARY
// ============================================================================

/// Emotionally charged vocabulary common in fabricated stories.
pub const EMOTIONAL_WORDS: &[&str] = &["shocking", "incredible", "amazing", "unbelievable"];

/// Known clickbait phrasings, matched as substrings.
pub const CLICKBAIT_PATTERNS: &[&str] =
    &["you won't believe", "shocking truth", "what happens next"];

/// More than this many '!' or '?' characters counts as excessive.
const MAX_BENIGN_PUNCTUATION: usize = 2;

// ============================================================================
// RESULT
// ============================================================================

/// Boolean lexical red flags for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(rename = "Emotional Language")]
    pub emotional_language: bool,
    #[serde(rename = "Clickbait Style")]
    pub clickbait_style: bool,
    #[serde(rename = "Excessive Punctuation")]
    pub excessive_punctuation: bool,
}

/// Evaluate all indicators against raw text.
pub fn check(raw_text: &str) -> Indicators {
    Indicators {
        emotional_language: has_emotional_language(raw_text),
        clickbait_style: has_clickbait(raw_text),
        excessive_punctuation: has_excessive_punctuation(raw_text),
    }
}

fn has_emotional_language(text: &str) -> bool {
    text.to_lowercase()
        .split_whitespace()
        .any(|word| EMOTIONAL_WORDS.contains(&word))
}

fn has_clickbait(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CLICKBAIT_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

fn has_excessive_punctuation(text: &str) -> bool {
    let exclamations = text.chars().filter(|&c| c == '!').count();
    let questions = text.chars().filter(|&c| c == '?').count();
    exclamations > MAX_BENIGN_PUNCTUATION || questions > MAX_BENIGN_PUNCTUATION
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotional_language_token_match() {
        let result = check("SHOCKING discovery rocks the scientific community");
        assert!(result.emotional_language);

        // Substring inside a larger word does not count.
        let result = check("the shockingly mundane report");
        assert!(!result.emotional_language);
    }

    #[test]
    fn test_clickbait_substring_match() {
        assert!(check("You Won't Believe What Happened").clickbait_style);
        assert!(check("the SHOCKING TRUTH about tea").clickbait_style);
        assert!(!check("a sober analysis of tea prices").clickbait_style);
    }

    #[test]
    fn test_punctuation_boundary_is_strict() {
        // Exactly two of each must NOT trigger the flag.
        assert!(!check("Really!! Are you sure??").excessive_punctuation);
        assert!(check("No way!!! Unreal").excessive_punctuation);
        assert!(check("Why? How? When? ").excessive_punctuation);
    }

    #[test]
    fn test_sensational_headline() {
        let result = check("SHOCKING: Scientists discover miracle cure... !!!");
        assert!(result.excessive_punctuation);
        // "SHOCKING:" is not a bare token, so the emotional flag depends on
        // whitespace tokenization of the raw text.
        assert!(!result.emotional_language);
    }

    #[test]
    fn test_empty_text_all_false() {
        let result = check("");
        assert!(!result.emotional_language);
        assert!(!result.clickbait_style);
        assert!(!result.excessive_punctuation);
    }
}
