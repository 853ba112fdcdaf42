//! Model bundle: preprocessing transform, booster, optional best iteration
//! and optional probability calibrator.
//!
//! The three model pieces sit behind traits so the persisted format can
//! change without touching feature extraction or inference. The on-disk
//! format is JSON; see [`load`].

mod booster;
mod calibrate;
mod error;
mod load;
mod preprocess;

pub use booster::{Booster, Objective, Tree, TreeEnsemble};
pub use calibrate::{Calibrator, IsotonicCalibrator, OutOfBounds, SigmoidCalibrator};
pub use error::{BundleError, BundleFormatError, CalibrationError, ScoreError, TransformError};
pub use load::{from_json_str, from_value, load};
pub use preprocess::{IdentityPreprocessor, Preprocessor, StandardScaler};

use serde::Serialize;
use std::path::Path;

/// A loaded, read-only model bundle. Safe to share across threads.
#[derive(Debug)]
pub struct ModelBundle {
    pub preprocessor: Box<dyn Preprocessor>,
    pub booster: Box<dyn Booster>,
    pub best_iteration: Option<usize>,
    pub calibrator: Option<Box<dyn Calibrator>>,
}

/// Human-facing description of a bundle.
#[derive(Debug, Clone, Serialize)]
pub struct BundleSummary {
    pub preprocessor: &'static str,
    pub input_width: Option<usize>,
    pub booster: &'static str,
    pub iterations: usize,
    pub best_iteration: Option<usize>,
    pub calibrator: Option<&'static str>,
}

impl ModelBundle {
    pub fn new(preprocessor: Box<dyn Preprocessor>, booster: Box<dyn Booster>) -> Self {
        Self {
            preprocessor,
            booster,
            best_iteration: None,
            calibrator: None,
        }
    }

    pub fn with_best_iteration(mut self, best_iteration: usize) -> Self {
        self.best_iteration = Some(best_iteration).filter(|&n| n > 0);
        self
    }

    pub fn with_calibrator(mut self, calibrator: Box<dyn Calibrator>) -> Self {
        self.calibrator = Some(calibrator);
        self
    }

    /// Loads a bundle from a JSON file. See [`load`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        load(path.as_ref())
    }

    pub fn summary(&self) -> BundleSummary {
        BundleSummary {
            preprocessor: self.preprocessor.kind(),
            input_width: self.preprocessor.output_width(),
            booster: self.booster.kind(),
            iterations: self.booster.num_iterations(),
            best_iteration: self.best_iteration,
            calibrator: self.calibrator.as_ref().map(|c| c.kind()),
        }
    }
}
