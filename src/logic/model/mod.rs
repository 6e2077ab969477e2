//! Trained model artifact and the statistical classifier built on it.

pub mod artifact;
pub mod inference;

pub use artifact::{ModelArtifact, ModelError};
pub use inference::{FakeNewsModel, Prediction};
