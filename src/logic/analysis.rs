//! Analysis orchestrator.
//!
//! Combines the text normalizer, the statistical classifier and the lexical
//! indicator checks into one result record. Classifier failures propagate:
//! a fabricated verdict is worse than a visible error.

use serde::Serialize;

use super::indicators::{self, Indicators};
use super::model::{FakeNewsModel, ModelError};
use super::preprocess::TextNormalizer;

/// Outcome of one analysis call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub is_fake: bool,
    /// Winning-class margin in percent, in [50, 100].
    pub confidence: f32,
    pub indicators: Indicators,
}

/// One-text-at-a-time analysis pipeline.
///
/// Holds the immutable model and normalizer; every call allocates only
/// local state, so a shared `Analyzer` is safe to use from multiple threads.
pub struct Analyzer {
    normalizer: TextNormalizer,
    model: FakeNewsModel,
}

impl Analyzer {
    pub fn new(model: FakeNewsModel) -> Self {
        Analyzer {
            normalizer: TextNormalizer::new(),
            model,
        }
    }

    pub fn with_normalizer(model: FakeNewsModel, normalizer: TextNormalizer) -> Self {
        Analyzer { normalizer, model }
    }

    /// Analyze raw article text.
    ///
    /// The classifier sees the normalized text; the indicator checks see the
    /// raw text, since normalization destroys punctuation and casing.
    pub fn analyze(&self, raw_text: &str) -> Result<AnalysisResult, ModelError> {
        let normalized = self.normalizer.normalize(raw_text);
        let prediction = self.model.classify(&normalized)?;

        Ok(AnalysisResult {
            is_fake: prediction.is_fake(),
            confidence: prediction.confidence(),
            indicators: indicators::check(raw_text),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::artifact::{ModelArtifact, ARTIFACT_SCHEMA_VERSION};

    fn fixture_analyzer() -> Analyzer {
        let artifact = ModelArtifact::from_bytes(
            serde_json::json!({
                "schema_version": ARTIFACT_SCHEMA_VERSION,
                "vocabulary": {"shocking": 0, "miracle": 1, "cure": 2, "study": 3, "exercise": 4},
                "idf": [1.7, 1.7, 1.4, 1.2, 1.2],
                "coef": [2.5, 2.0, 1.5, -2.5, -2.0],
                "intercept": 0.0,
            })
            .to_string()
            .as_bytes(),
        )
        .unwrap();

        Analyzer::new(FakeNewsModel::from_artifact(artifact).unwrap())
    }

    #[test]
    fn test_fake_verdict_with_indicators() {
        let analyzer = fixture_analyzer();
        let result = analyzer
            .analyze("SHOCKING: Scientists discover miracle cure!!! You won't believe it")
            .unwrap();

        assert!(result.is_fake);
        assert!(result.confidence >= 50.0 && result.confidence <= 100.0);
        assert!(result.indicators.excessive_punctuation);
        assert!(result.indicators.clickbait_style);
    }

    #[test]
    fn test_genuine_verdict() {
        let analyzer = fixture_analyzer();
        let result = analyzer
            .analyze("New study shows benefits of regular exercise on mental health")
            .unwrap();

        assert!(!result.is_fake);
        assert!(!result.indicators.emotional_language);
        assert!(!result.indicators.excessive_punctuation);
    }

    #[test]
    fn test_indicators_see_raw_text() {
        let analyzer = fixture_analyzer();
        // Normalization would strip all the punctuation this flag needs.
        let result = analyzer.analyze("what!!! is!!! happening!!!").unwrap();
        assert!(result.indicators.excessive_punctuation);
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let analyzer = fixture_analyzer();
        let a = analyzer.analyze("shocking miracle cure study").unwrap();
        let b = analyzer.analyze("shocking miracle cure study").unwrap();
        assert_eq!(a.is_fake, b.is_fake);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.indicators, b.indicators);
    }
}
