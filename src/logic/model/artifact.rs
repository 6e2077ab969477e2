//! Trained model artifact.
//!
//! The artifact is a JSON file holding a fitted TF-IDF vocabulary and the
//! weights of a binary logistic-regression classifier (positive class =
//! fake). It is produced offline by the training pipeline and is immutable
//! at runtime. A missing or unreadable artifact is a fatal startup
//! condition for the classifier.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Current artifact schema version.
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;

/// Extension of the optional integrity sidecar file.
const CHECKSUM_EXT: &str = "sha256";

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Model artifact load errors.
#[derive(Debug, Clone)]
pub enum ModelError {
    /// Artifact file does not exist
    NotFound { path: PathBuf },
    /// I/O failure while reading the artifact
    Io { message: String },
    /// Artifact is not valid JSON or has the wrong schema
    Parse { message: String },
    /// Artifact is structurally invalid (dimension mismatch, bad weights)
    Corrupt { message: String },
    /// SHA-256 sidecar did not match the artifact bytes
    ChecksumMismatch { expected: String, actual: String },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::NotFound { path } => {
                write!(f, "Model artifact not found: {}", path.display())
            }
            ModelError::Io { message } => write!(f, "Model I/O error: {}", message),
            ModelError::Parse { message } => write!(f, "Model parse error: {}", message),
            ModelError::Corrupt { message } => write!(f, "Model artifact corrupt: {}", message),
            ModelError::ChecksumMismatch { expected, actual } => write!(
                f,
                "Model checksum mismatch: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ModelError {}

// ============================================================================
// ARTIFACT
// ============================================================================

/// Serialized vectorizer + classifier pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    /// Term -> feature index of the fitted vocabulary.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    pub idf: Vec<f32>,
    /// Logistic-regression coefficient per feature index.
    pub coef: Vec<f32>,
    /// Logistic-regression intercept.
    pub intercept: f32,
}

impl ModelArtifact {
    /// Load and validate an artifact from disk.
    ///
    /// If a `<path>.sha256` sidecar exists, the artifact bytes must match it.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            });
        }

        verify_checksum(path)?;

        let file = File::open(path).map_err(|e| ModelError::Io {
            message: e.to_string(),
        })?;
        let reader = BufReader::new(file);

        let artifact: ModelArtifact =
            serde_json::from_reader(reader).map_err(|e| ModelError::Parse {
                message: e.to_string(),
            })?;

        artifact.validate()?;
        Ok(artifact)
    }

    /// Load and validate an artifact from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ModelArtifact =
            serde_json::from_slice(bytes).map_err(|e| ModelError::Parse {
                message: e.to_string(),
            })?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Structural validation: every vocabulary index must address one idf and
    /// one coefficient entry.
    fn validate(&self) -> Result<(), ModelError> {
        if self.schema_version != ARTIFACT_SCHEMA_VERSION {
            return Err(ModelError::Parse {
                message: format!("unsupported schema version {}", self.schema_version),
            });
        }

        let features = self.vocabulary.len();
        if features == 0 {
            return Err(ModelError::Corrupt {
                message: "empty vocabulary".to_string(),
            });
        }

        if self.idf.len() != features || self.coef.len() != features {
            return Err(ModelError::Corrupt {
                message: format!(
                    "dimension mismatch: {} terms, {} idf, {} coef",
                    features,
                    self.idf.len(),
                    self.coef.len()
                ),
            });
        }

        if let Some(&index) = self.vocabulary.values().find(|&&i| i >= features) {
            return Err(ModelError::Corrupt {
                message: format!("vocabulary index {} out of range", index),
            });
        }

        Ok(())
    }
}

/// Compare the artifact bytes against its optional `.sha256` sidecar.
fn verify_checksum(path: &Path) -> Result<(), ModelError> {
    let sidecar = PathBuf::from(format!("{}.{}", path.display(), CHECKSUM_EXT));
    if !sidecar.exists() {
        return Ok(());
    }

    let expected = std::fs::read_to_string(&sidecar).map_err(|e| ModelError::Io {
        message: e.to_string(),
    })?;
    let expected = expected
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let mut file = File::open(path).map_err(|e| ModelError::Io {
        message: e.to_string(),
    })?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer).map_err(|e| ModelError::Io {
            message: e.to_string(),
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    let actual = hex::encode(hasher.finalize());

    if actual != expected {
        return Err(ModelError::ChecksumMismatch { expected, actual });
    }

    log::debug!("model checksum verified: {}", actual);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_artifact_json() -> String {
        serde_json::json!({
            "schema_version": ARTIFACT_SCHEMA_VERSION,
            "vocabulary": {"shocking": 0, "cure": 1, "study": 2},
            "idf": [1.5, 1.2, 1.0],
            "coef": [2.0, 1.0, -2.0],
            "intercept": -0.1,
        })
        .to_string()
    }

    #[test]
    fn test_load_valid_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, sample_artifact_json()).unwrap();

        let artifact = ModelArtifact::load(&path).unwrap();
        assert_eq!(artifact.vocabulary.len(), 3);
        assert_eq!(artifact.idf.len(), 3);
    }

    #[test]
    fn test_missing_artifact_is_not_found() {
        let err = ModelArtifact::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound { .. }));
    }

    #[test]
    fn test_dimension_mismatch_is_corrupt() {
        let bytes = serde_json::json!({
            "schema_version": ARTIFACT_SCHEMA_VERSION,
            "vocabulary": {"a": 0, "b": 1},
            "idf": [1.0],
            "coef": [1.0, 2.0],
            "intercept": 0.0,
        })
        .to_string();

        let err = ModelArtifact::from_bytes(bytes.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelError::Corrupt { .. }));
    }

    #[test]
    fn test_checksum_sidecar_verified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let json = sample_artifact_json();
        std::fs::write(&path, &json).unwrap();

        // Matching sidecar loads fine.
        let digest = hex::encode(Sha256::digest(json.as_bytes()));
        let sidecar = dir.path().join("model.json.sha256");
        let mut f = File::create(&sidecar).unwrap();
        writeln!(f, "{}  model.json", digest).unwrap();
        assert!(ModelArtifact::load(&path).is_ok());

        // Tampered sidecar fails the load.
        std::fs::write(&sidecar, "deadbeef").unwrap();
        let err = ModelArtifact::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::ChecksumMismatch { .. }));
    }
}
