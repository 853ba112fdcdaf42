//! `phishguard serve` – run the HTTP prediction service.

use anyhow::Result;
use phishguard_core::ModelBundle;
use std::path::Path;

use crate::server::{self, AppState};

pub async fn run_serve(path: &Path, bundle: ModelBundle, bind: &str, threshold: f64) -> Result<()> {
    println!("Model bundle: {}", path.display());
    println!("Default threshold: {threshold}");
    let state = AppState::new(bundle, threshold);
    server::run(state, bind).await
}
