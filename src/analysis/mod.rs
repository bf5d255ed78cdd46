// Analysis core — document signals and relationship scoring.
//
// Both components take the model as an explicit `&dyn LinguisticModel`
// argument; neither holds state between calls, and neither calls the other.

pub mod document;
pub mod relationship;

use thiserror::Error;

pub use document::{analyze, DocumentSignals, Entity};
pub use relationship::{compare, RelationshipResult, RelationshipType, SharedEntity};

/// Errors surfaced by the analysis core.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The linguistic model failed. The message is passed through unchanged.
    #[error(transparent)]
    Provider(#[from] anyhow::Error),

    /// The model returned a similarity outside [0, 1].
    #[error("Model returned an invalid similarity score: {0}")]
    InvalidSimilarity(f64),
}
