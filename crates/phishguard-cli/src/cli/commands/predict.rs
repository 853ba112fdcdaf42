//! `phishguard predict` – classify one URL.

use anyhow::Result;
use phishguard_core::inference::{predict, PredictionResult};
use phishguard_core::ModelBundle;

use crate::cli::OutputFormat;

/// Number of leading features shown with `--verbose`.
const PREVIEW_FEATURES: usize = 10;

pub fn run_predict(
    bundle: &ModelBundle,
    url: &str,
    threshold: f64,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let result = predict(bundle, url, threshold, verbose)?;
    match format {
        OutputFormat::Text => print!("{}", render_text(&result, threshold, verbose)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(&result)?)?),
    }
    Ok(())
}

pub(crate) fn render_text(result: &PredictionResult, threshold: f64, verbose: bool) -> String {
    let mut out = String::new();
    if verbose {
        out.push_str(&format!("URL: {}\n", result.url));
        out.push_str(&format!(
            "Input feature vector (first {PREVIEW_FEATURES}): {}\n",
            result.features.preview(PREVIEW_FEATURES)
        ));
    }
    out.push_str(&format!(
        "Predicted probability (phish) = {:.6} -> Verdict = {} (threshold {})\n",
        result.probability, result.label, threshold
    ));
    out
}

/// Prediction plus the derived `is_phishing` and `confidence` fields.
pub(crate) fn to_json(result: &PredictionResult) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("is_phishing".into(), result.is_phishing().into());
        obj.insert("confidence".into(), result.confidence().into());
    }
    Ok(value)
}
