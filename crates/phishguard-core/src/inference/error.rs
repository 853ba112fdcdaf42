//! Prediction errors.

use thiserror::Error;

use crate::bundle::{ScoreError, TransformError};

/// A prediction that could not be completed. Each variant points at a
/// mismatch between this feature extractor and the bundle it is paired with.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The preprocessor rejected the feature record.
    #[error("preprocessor transform failed. Columns supplied: {columns:?}. Error: {source}")]
    Preprocessing {
        columns: Vec<String>,
        #[source]
        source: TransformError,
    },

    /// The booster could not score the transformed row.
    #[error("booster failed to score the row: {0}")]
    Scoring(#[from] ScoreError),

    /// The booster produced something other than one probability.
    #[error("expected a single probability output but got {len} values")]
    InferenceShape { len: usize },
}
