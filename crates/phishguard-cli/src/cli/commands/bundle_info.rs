//! `phishguard bundle-info` – describe a model bundle.

use anyhow::Result;
use phishguard_core::bundle::BundleSummary;
use phishguard_core::ModelBundle;
use std::path::Path;

use crate::cli::OutputFormat;

pub fn run_bundle_info(path: &Path, bundle: &ModelBundle, format: OutputFormat) -> Result<()> {
    let summary = bundle.summary();
    match format {
        OutputFormat::Text => print!("{}", render_summary(path, &summary)),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&summary)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("path".into(), path.display().to_string().into());
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

pub(crate) fn render_summary(path: &Path, s: &BundleSummary) -> String {
    let inputs = s
        .input_width
        .map(|n| format!(" ({n} inputs)"))
        .unwrap_or_default();
    let best = s
        .best_iteration
        .map(|n| n.to_string())
        .unwrap_or_else(|| "all".to_string());
    format!(
        "{:<16}{}\n{:<16}{}{}\n{:<16}{}, {} rounds\n{:<16}{}\n{:<16}{}\n",
        "bundle:",
        path.display(),
        "preprocessor:",
        s.preprocessor,
        inputs,
        "booster:",
        s.booster,
        s.iterations,
        "best iteration:",
        best,
        "calibrator:",
        s.calibrator.unwrap_or("none"),
    )
}
