//! Statistical classifier.
//!
//! Maps normalized text into the fixed TF-IDF feature space of the loaded
//! artifact and evaluates the logistic decision function. The model is
//! read-only after load and safe to share across concurrent callers.

use std::collections::HashMap;
use std::path::Path;

use ndarray::Array1;
use serde::Serialize;

use super::artifact::{ModelArtifact, ModelError};

// ============================================================================
// PREDICTION
// ============================================================================

/// Class probability distribution for one piece of text.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Prediction {
    pub probability_fake: f32,
    pub probability_genuine: f32,
}

impl Prediction {
    /// Decision rule: fake wins strictly above even odds.
    pub fn is_fake(&self) -> bool {
        self.probability_fake > 0.5
    }

    /// Winning-class margin as a percentage, always in [50, 100].
    pub fn confidence(&self) -> f32 {
        self.probability_fake.max(self.probability_genuine) * 100.0
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// Loaded vectorizer + classifier pair.
#[derive(Debug, Clone)]
pub struct FakeNewsModel {
    vocabulary: HashMap<String, usize>,
    idf: Array1<f32>,
    coef: Array1<f32>,
    intercept: f32,
}

impl FakeNewsModel {
    /// Load the model from an artifact file. Fails if the artifact is
    /// missing, unreadable or structurally invalid.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let artifact = ModelArtifact::load(path)?;
        log::info!(
            "Model loaded from {} ({} vocabulary terms)",
            path.display(),
            artifact.vocabulary.len()
        );
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        Ok(FakeNewsModel {
            vocabulary: artifact.vocabulary,
            idf: Array1::from_vec(artifact.idf),
            coef: Array1::from_vec(artifact.coef),
            intercept: artifact.intercept,
        })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Classify normalized text into a fake/genuine probability pair.
    ///
    /// Terms outside the fitted vocabulary are ignored. Text with no known
    /// terms falls back to the intercept-only prior.
    pub fn classify(&self, normalized_text: &str) -> Result<Prediction, ModelError> {
        let features = self.transform(normalized_text);
        let z = self.coef.dot(&features) + self.intercept;
        let probability_fake = sigmoid(z);

        // Non-finite weights survive structural validation but poison the
        // decision function. Surface that instead of reporting a verdict.
        if !probability_fake.is_finite() {
            return Err(ModelError::Corrupt {
                message: "decision function produced a non-finite probability".to_string(),
            });
        }

        Ok(Prediction {
            probability_fake,
            probability_genuine: 1.0 - probability_fake,
        })
    }

    /// TF-IDF transform with L2 normalization over the fixed vocabulary.
    fn transform(&self, normalized_text: &str) -> Array1<f32> {
        let mut features = Array1::<f32>::zeros(self.vocabulary.len());

        for token in normalized_text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }

        features *= &self.idf;

        let norm = features.dot(&features).sqrt();
        if norm > 0.0 {
            features /= norm;
        }

        features
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

// ============================================================================
// TESTS
// ============================================================================
