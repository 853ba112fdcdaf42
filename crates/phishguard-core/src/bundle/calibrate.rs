//! Probability calibrators.

use serde::Deserialize;
use std::fmt;

use super::error::{BundleFormatError, CalibrationError};

/// Remaps a raw booster probability to a calibrated one.
pub trait Calibrator: fmt::Debug + Send + Sync {
    fn calibrate(&self, probability: f64) -> Result<f64, CalibrationError>;

    fn kind(&self) -> &'static str;
}

/// Platt scaling: `1 / (1 + exp(a * p + b))`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SigmoidCalibrator {
    pub a: f64,
    pub b: f64,
}

impl Calibrator for SigmoidCalibrator {
    fn calibrate(&self, probability: f64) -> Result<f64, CalibrationError> {
        Ok(1.0 / (1.0 + (self.a * probability + self.b).exp()))
    }

    fn kind(&self) -> &'static str {
        "sigmoid"
    }
}

/// What an isotonic calibrator does with inputs outside its breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfBounds {
    #[default]
    Clip,
    Raise,
}

/// Piecewise-linear monotone map through `(x[i], y[i])` breakpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct IsotonicCalibrator {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub out_of_bounds: OutOfBounds,
}

impl IsotonicCalibrator {
    pub(crate) fn validate(&self) -> Result<(), BundleFormatError> {
        if self.x.is_empty() || self.x.len() != self.y.len() {
            return Err(BundleFormatError::invalid(
                "calibrator",
                format!(
                    "isotonic needs matching non-empty breakpoints, got {} x and {} y",
                    self.x.len(),
                    self.y.len()
                ),
            ));
        }
        if self
            .x
            .windows(2)
            .any(|w| w[0].partial_cmp(&w[1]).map_or(true, |o| o.is_gt()))
        {
            return Err(BundleFormatError::invalid(
                "calibrator",
                "isotonic x breakpoints must be sorted",
            ));
        }
        Ok(())
    }
}

impl Calibrator for IsotonicCalibrator {
    fn calibrate(&self, probability: f64) -> Result<f64, CalibrationError> {
        let (first, last) = match (self.x.first(), self.x.last()) {
            (Some(f), Some(l)) if f <= l && self.x.len() == self.y.len() => (*f, *l),
            _ => return Err(CalibrationError::Other("unusable breakpoints".to_string())),
        };
        if probability.is_nan() {
            return Err(CalibrationError::OutOfBounds(probability));
        }
        let outside = probability < first || probability > last;
        if outside && self.out_of_bounds == OutOfBounds::Raise {
            return Err(CalibrationError::OutOfBounds(probability));
        }
        let p = probability.clamp(first, last);

        // first breakpoint strictly greater than p
        let hi = self.x.partition_point(|&x| x <= p);
        if hi == 0 {
            return Ok(self.y[0]);
        }
        if hi == self.x.len() {
            return Ok(self.y[hi - 1]);
        }
        let lo = hi - 1;
        let (x0, x1, y0, y1) = (self.x[lo], self.x[hi], self.y[lo], self.y[hi]);
        Ok(y0 + (p - x0) * (y1 - y0) / (x1 - x0))
    }

    fn kind(&self) -> &'static str {
        "isotonic"
    }
}
