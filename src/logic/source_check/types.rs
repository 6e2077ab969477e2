//! Source credibility result types.

use serde::{Deserialize, Serialize};

/// Individual signals feeding the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibilityFactors {
    /// Host is on the known-credible list (exact match)
    pub is_known_credible: bool,
    /// Host is on the known-fake list (exact match)
    pub is_known_fake: bool,
    /// Final resolved URL scheme is https
    pub has_ssl: bool,
    /// Whole years since domain registration, 0 when unknown
    pub domain_age: u32,
    /// Host matches a suspicious lexical pattern
    pub suspicious_patterns: bool,
}

/// Bounded trust estimate for a URL's host plus the rationale behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityResult {
    /// Composite score clamped to [0, 100]
    pub credibility_score: u8,
    pub factors: CredibilityFactors,
    /// Human-readable rationale, headline tier first
    pub details: Vec<String>,
}

impl CredibilityResult {
    /// Terminal result for input that yields no host.
    pub fn invalid_url() -> Self {
        CredibilityResult {
            credibility_score: 0,
            factors: CredibilityFactors {
                is_known_credible: false,
                is_known_fake: false,
                has_ssl: false,
                domain_age: 0,
                suspicious_patterns: true,
            },
            details: vec!["Invalid URL format".to_string()],
        }
    }
}
