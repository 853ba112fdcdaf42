//! `phishguard features` – show the extracted feature vector.

use anyhow::Result;
use phishguard_core::{extract, FeatureVector};

use crate::cli::OutputFormat;

pub fn run_features(url: &str, format: OutputFormat) -> Result<()> {
    let features = extract(url);
    match format {
        OutputFormat::Text => print!("{}", render_table(&features)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&features)?),
    }
    Ok(())
}

pub(crate) fn render_table(features: &FeatureVector) -> String {
    let width = features
        .columns()
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0);
    features
        .iter()
        .map(|(name, value)| format!("{name:<width$}  {value}\n"))
        .collect()
}
