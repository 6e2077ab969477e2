//! Suspicious hostname patterns.
//!
//! Lexical anomalies correlated with throwaway and low-quality domains.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// A character repeated this many times or more is suspicious.
const MAX_CHAR_RUN: usize = 4;

/// Regex-expressible host patterns: digits before a dot, long digit
/// sequences, "news" followed by a digit.
static SUSPICIOUS_HOST_PATTERNS: Lazy<Option<RegexSet>> =
    Lazy::new(|| RegexSet::new([r"\d\.", r"[0-9]{4,}", r"news\d"]).ok());

/// True if the (lowercased) host matches any suspicious pattern.
pub fn is_suspicious(host: &str) -> bool {
    let regex_hit = SUSPICIOUS_HOST_PATTERNS
        .as_ref()
        .map(|set| set.is_match(host))
        .unwrap_or(false);

    regex_hit || has_long_char_run(host)
}

/// Character repeated more than MAX_CHAR_RUN times consecutively.
fn has_long_char_run(host: &str) -> bool {
    let mut run = 0;
    let mut previous = None;

    for ch in host.chars() {
        if Some(ch) == previous {
            run += 1;
            if run > MAX_CHAR_RUN {
                return true;
            }
        } else {
            previous = Some(ch);
            run = 1;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_before_dot() {
        assert!(is_suspicious("news24.com"));
        assert!(is_suspicious("breaking7.net"));
        assert!(!is_suspicious("reuters.com"));
    }

    #[test]
    fn test_long_digit_sequence() {
        assert!(is_suspicious("site1234news.com"));
        assert!(!is_suspicious("bbc.co.uk"));
    }

    #[test]
    fn test_news_followed_by_digit() {
        assert!(is_suspicious("news1-daily.com"));
        assert!(!is_suspicious("newsroom.org"));
    }

    #[test]
    fn test_character_runs() {
        assert!(is_suspicious("aaaaab.com"));
        assert!(!is_suspicious("aaaa.com")); // four repeats, below the bar
        assert!(!is_suspicious("google.com"));
    }
}
