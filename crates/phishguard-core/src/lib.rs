//! Phishing URL classification: lexical feature extraction, model bundle
//! loading, and thresholded prediction.

pub mod bundle;
pub mod config;
pub mod features;
pub mod inference;
pub mod logging;
pub mod url_model;

pub use bundle::ModelBundle;
pub use features::{extract, FeatureVector, FEATURE_COLUMNS};
pub use inference::{predict, Label, PredictError, PredictionResult};
