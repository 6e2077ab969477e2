//! Text normalization pipeline.
//!
//! Prepares raw article text for the statistical classifier: lowercase,
//! strip non-alphabetic characters, tokenize, drop stop words, lemmatize.
//! Each linguistic capability carries a fallback tier so missing resources
//! degrade the output instead of failing the analysis.

mod lemmatizer;
mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use stopwords::is_stop_word;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Tokens shorter than this are dropped by the degraded filter tier.
const MIN_TOKEN_LEN: usize = 3;

/// Everything that is not a lowercase letter or whitespace becomes a space.
static NON_ALPHA: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[^a-z\s]").ok());

/// How words are split out of cleaned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerTier {
    /// Unicode word-boundary segmentation.
    Unicode,
    /// Naive whitespace splitting.
    Whitespace,
}

/// How tokens are filtered after splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTier {
    /// Stop word removal followed by lemmatization.
    Linguistic,
    /// Drop tokens of length <= 2 as a crude stop word proxy.
    LengthHeuristic,
}

/// Normalizer with its capability tiers resolved once at construction.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    tokenizer: TokenizerTier,
    filter: FilterTier,
    lemmatizer: Option<Lemmatizer>,
}

impl TextNormalizer {
    /// Normalizer with the full linguistic pipeline.
    pub fn new() -> Self {
        TextNormalizer {
            tokenizer: TokenizerTier::Unicode,
            filter: FilterTier::Linguistic,
            lemmatizer: Some(Lemmatizer::new()),
        }
    }

    /// Degraded normalizer: whitespace tokenization, length-based filtering.
    pub fn bare() -> Self {
        TextNormalizer {
            tokenizer: TokenizerTier::Whitespace,
            filter: FilterTier::LengthHeuristic,
            lemmatizer: None,
        }
    }

    pub fn with_tiers(tokenizer: TokenizerTier, filter: FilterTier) -> Self {
        let lemmatizer = match filter {
            FilterTier::Linguistic => Some(Lemmatizer::new()),
            FilterTier::LengthHeuristic => None,
        };
        TextNormalizer {
            tokenizer,
            filter,
            lemmatizer,
        }
    }

    /// Normalize raw text into a space-joined token string.
    ///
    /// Never fails: if any pipeline step is unavailable the original text is
    /// returned whitespace-split and space-joined, without the cleaning rules.
    pub fn normalize(&self, text: &str) -> String {
        match self.normalize_inner(text) {
            Some(normalized) => normalized,
            None => {
                log::debug!("text cleaning unavailable, returning raw tokens");
                text.split_whitespace().collect::<Vec<_>>().join(" ")
            }
        }
    }

    fn normalize_inner(&self, text: &str) -> Option<String> {
        let lowered = text.to_lowercase();
        let cleaned = NON_ALPHA.as_ref()?.replace_all(&lowered, " ");

        let tokens = self.tokenize(&cleaned);

        let kept: Vec<String> = match self.filter {
            FilterTier::Linguistic => {
                let lemmatizer = self.lemmatizer.as_ref()?;
                tokens
                    .into_iter()
                    .filter(|token| !is_stop_word(token))
                    .map(|token| lemmatizer.lemmatize(token))
                    .collect()
            }
            FilterTier::LengthHeuristic => tokens
                .into_iter()
                .filter(|token| token.len() >= MIN_TOKEN_LEN)
                .map(str::to_string)
                .collect(),
        };

        Some(kept.join(" "))
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.tokenizer {
            TokenizerTier::Unicode => text.unicode_words().collect(),
            TokenizerTier::Whitespace => text.split_whitespace().collect(),
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
