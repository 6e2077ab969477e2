//! Core analysis logic.
//!
//! Text preprocessing, the statistical classifier, lexical indicators,
//! the source credibility scorer and the surrounding collaborators
//! (article fetch, analysis history).

pub mod analysis;
pub mod fetch;
pub mod history;
pub mod indicators;
pub mod model;
pub mod preprocess;
pub mod source_check;
