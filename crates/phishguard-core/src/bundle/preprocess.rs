//! Preprocessing transforms: feature record → model input row.

use serde::Deserialize;
use std::fmt;

use super::error::{BundleFormatError, TransformError};
use crate::features::{FeatureVector, FEATURE_COUNT};

/// Turns the canonical feature record into the booster's input row.
pub trait Preprocessor: fmt::Debug + Send + Sync {
    fn transform(&self, record: &FeatureVector) -> Result<Vec<f64>, TransformError>;

    /// Short name for summaries and logs.
    fn kind(&self) -> &'static str;

    /// Number of values produced per record, if fixed by the transform.
    fn output_width(&self) -> Option<usize> {
        None
    }
}

/// Selects `columns` by name from the record, in that order.
fn select_columns(record: &FeatureVector, columns: &[String]) -> Result<Vec<f64>, TransformError> {
    let mut row = Vec::with_capacity(columns.len());
    let mut missing = Vec::new();
    for name in columns {
        match record.get(name) {
            Some(v) => row.push(v.as_f64()),
            None => missing.push(name.clone()),
        }
    }
    if missing.is_empty() {
        Ok(row)
    } else {
        Err(TransformError::MissingColumns { missing })
    }
}

/// Passes values through unchanged, optionally selecting and reordering
/// columns by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityPreprocessor {
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl Preprocessor for IdentityPreprocessor {
    fn transform(&self, record: &FeatureVector) -> Result<Vec<f64>, TransformError> {
        match &self.columns {
            Some(columns) => select_columns(record, columns),
            None => Ok(record.to_row()),
        }
    }

    fn kind(&self) -> &'static str {
        "identity"
    }

    fn output_width(&self) -> Option<usize> {
        Some(self.columns.as_ref().map_or(FEATURE_COUNT, Vec::len))
    }
}

/// Standardizes each selected column: `(x - mean) / scale`.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub columns: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub(crate) fn validate(&self) -> Result<(), BundleFormatError> {
        if self.columns.is_empty() {
            return Err(BundleFormatError::invalid(
                "preprocessor",
                "standard_scaler needs at least one column",
            ));
        }
        if self.mean.len() != self.columns.len() || self.scale.len() != self.columns.len() {
            return Err(BundleFormatError::invalid(
                "preprocessor",
                format!(
                    "standard_scaler has {} columns but {} means and {} scales",
                    self.columns.len(),
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }
        Ok(())
    }
}

impl Preprocessor for StandardScaler {
    fn transform(&self, record: &FeatureVector) -> Result<Vec<f64>, TransformError> {
        let mut row = select_columns(record, &self.columns)?;
        for ((x, mean), scale) in row.iter_mut().zip(&self.mean).zip(&self.scale) {
            // constant training columns were stored with scale 0
            let scale = if *scale == 0.0 { 1.0 } else { *scale };
            *x = (*x - mean) / scale;
        }
        Ok(row)
    }

    fn kind(&self) -> &'static str {
        "standard_scaler"
    }

    fn output_width(&self) -> Option<usize> {
        Some(self.columns.len())
    }
}
