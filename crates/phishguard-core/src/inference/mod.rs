//! Inference: features → preprocessing → booster → calibration → label.
//!
//! [`predict`] is synchronous and holds no state between calls; a bundle
//! loaded once can serve any number of concurrent predictions.

mod error;

pub use error::PredictError;

use serde::Serialize;
use std::fmt;

use crate::bundle::{CalibrationError, ModelBundle};
use crate::features::{extract, FeatureVector};

/// Features shown in the verbose summary.
const PREVIEW_FEATURES: usize = 10;

/// Verdict for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "PHISHING")]
    Phishing,
    #[serde(rename = "LEGIT")]
    Legit,
}

impl Label {
    /// `Phishing` iff `probability >= threshold`.
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            Label::Phishing
        } else {
            Label::Legit
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Phishing => "PHISHING",
            Label::Legit => "LEGIT",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one prediction.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    pub url: String,
    pub probability: f64,
    pub label: Label,
    pub features: FeatureVector,
}

impl PredictionResult {
    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }

    /// Distance from the undecided point, scaled to [0, 1].
    pub fn confidence(&self) -> f64 {
        (self.probability - 0.5).abs() * 2.0
    }
}

/// Classifies `url` with `bundle`.
///
/// Calibration is best-effort: if the calibrator fails, or returns
/// something that is not a probability, the raw booster probability is
/// used. With `verbose`, a short summary is logged at info level.
pub fn predict(
    bundle: &ModelBundle,
    url: &str,
    threshold: f64,
    verbose: bool,
) -> Result<PredictionResult, PredictError> {
    let features = extract(url);

    let row = bundle
        .preprocessor
        .transform(&features)
        .map_err(|source| PredictError::Preprocessing {
            columns: features.columns().iter().map(|c| c.to_string()).collect(),
            source,
        })?;

    let outputs = bundle.booster.predict(&row, bundle.best_iteration)?;
    let raw = match outputs.as_slice() {
        [p] => *p,
        _ => return Err(PredictError::InferenceShape { len: outputs.len() }),
    };

    let probability = match &bundle.calibrator {
        Some(calibrator) => match calibrated(calibrator.calibrate(raw)) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("calibration failed, using raw probability {raw}: {e}");
                raw
            }
        },
        None => raw,
    };

    let label = Label::from_probability(probability, threshold);

    if verbose {
        tracing::info!("URL: {url}");
        tracing::info!(
            "Input feature vector (first {PREVIEW_FEATURES}): {}",
            features.preview(PREVIEW_FEATURES)
        );
        tracing::info!(
            "Predicted probability (phish) = {probability:.6} -> Verdict = {label} (threshold {threshold})"
        );
    }

    Ok(PredictionResult {
        url: url.to_string(),
        probability,
        label,
        features,
    })
}

/// Rejects calibrator output outside [0, 1].
fn calibrated(result: Result<f64, CalibrationError>) -> Result<f64, CalibrationError> {
    let p = result?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(CalibrationError::NotAProbability(p))
    }
}
