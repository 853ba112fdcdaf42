//! JSON bundle decoding and validation.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use super::booster::{Booster, TreeEnsemble};
use super::calibrate::{Calibrator, IsotonicCalibrator, SigmoidCalibrator};
use super::error::{BundleError, BundleFormatError};
use super::preprocess::{IdentityPreprocessor, Preprocessor, StandardScaler};
use super::ModelBundle;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PreprocessorRepr {
    Identity(IdentityPreprocessor),
    StandardScaler(StandardScaler),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BoosterRepr {
    TreeEnsemble(TreeEnsemble),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum CalibratorRepr {
    Sigmoid(SigmoidCalibrator),
    Isotonic(IsotonicCalibrator),
}

/// Reads and validates the bundle at `path`.
pub fn load(path: &Path) -> Result<ModelBundle, BundleError> {
    let data = fs::read_to_string(path).map_err(|source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle = from_json_str(&data)?;
    tracing::debug!(
        "loaded bundle from {} (preprocessor={}, booster={}, calibrator={})",
        path.display(),
        bundle.preprocessor.kind(),
        bundle.booster.kind(),
        bundle.calibrator.as_ref().map_or("none", |c| c.kind())
    );
    Ok(bundle)
}

pub fn from_json_str(data: &str) -> Result<ModelBundle, BundleError> {
    let value: Value = serde_json::from_str(data)?;
    Ok(from_value(value)?)
}

/// Builds a bundle from an already-parsed JSON document.
///
/// `preprocessor` and `booster` are required (null counts as missing);
/// `best_iteration` and `calibrator` are optional, and a non-positive
/// `best_iteration` means "use every round".
pub fn from_value(value: Value) -> Result<ModelBundle, BundleFormatError> {
    let Value::Object(mut map) = value else {
        return Err(BundleFormatError::NotAnObject);
    };
    let preprocessor = take_required(&mut map, "preprocessor")?;
    let booster = take_required(&mut map, "booster")?;

    let preprocessor: Box<dyn Preprocessor> =
        match decode::<PreprocessorRepr>("preprocessor", preprocessor)? {
            PreprocessorRepr::Identity(p) => Box::new(p),
            PreprocessorRepr::StandardScaler(p) => {
                p.validate()?;
                Box::new(p)
            }
        };
    let booster: Box<dyn Booster> = match decode::<BoosterRepr>("booster", booster)? {
        BoosterRepr::TreeEnsemble(b) => {
            b.validate()?;
            Box::new(b)
        }
    };

    let best_iteration = take_optional(&mut map, "best_iteration")
        .map(|v| decode::<i64>("best_iteration", v))
        .transpose()?
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n > 0);

    let calibrator = take_optional(&mut map, "calibrator")
        .map(|v| -> Result<Box<dyn Calibrator>, BundleFormatError> {
            Ok(match decode::<CalibratorRepr>("calibrator", v)? {
                CalibratorRepr::Sigmoid(c) => Box::new(c),
                CalibratorRepr::Isotonic(c) => {
                    c.validate()?;
                    Box::new(c)
                }
            })
        })
        .transpose()?;

    if let (Some(width), Some(n)) = (preprocessor.output_width(), booster.input_width()) {
        if width != n {
            return Err(BundleFormatError::invalid(
                "booster",
                format!("expects {n} features but the preprocessor produces {width}"),
            ));
        }
    }

    let mut bundle = ModelBundle::new(preprocessor, booster);
    bundle.best_iteration = best_iteration;
    bundle.calibrator = calibrator;
    Ok(bundle)
}

fn take_optional(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    map.remove(key).filter(|v| !v.is_null())
}

fn take_required(
    map: &mut Map<String, Value>,
    key: &'static str,
) -> Result<Value, BundleFormatError> {
    take_optional(map, key).ok_or(BundleFormatError::MissingField(key))
}

fn decode<T: DeserializeOwned>(field: &'static str, value: Value) -> Result<T, BundleFormatError> {
    serde_json::from_value(value).map_err(|e| BundleFormatError::invalid(field, e.to_string()))
}
