//! Error types for bundle loading and the preprocessing/scoring/calibration seams.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a model bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read bundle {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bundle is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] BundleFormatError),
}

/// The artifact parsed but does not describe a usable bundle.
#[derive(Debug, Error)]
pub enum BundleFormatError {
    #[error("bundle must be a JSON object")]
    NotAnObject,

    #[error("bundle must contain '{0}'")]
    MissingField(&'static str),

    #[error("invalid '{field}' in bundle: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl BundleFormatError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        BundleFormatError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// The preprocessor could not turn the feature record into model input.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("missing columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("expected {expected} columns, got {actual}")]
    ColumnCount { expected: usize, actual: usize },
}

/// The booster could not score the transformed row.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("booster expects {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("ensemble has no classes (num_class 0)")]
    NoClasses,

    #[error("tree {tree} is malformed: {reason}")]
    MalformedTree { tree: usize, reason: String },
}

/// The calibrator could not remap a probability.
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("probability {0} is outside the calibrated range")]
    OutOfBounds(f64),

    #[error("calibrated value {0} is not a probability")]
    NotAProbability(f64),

    #[error("{0}")]
    Other(String),
}
