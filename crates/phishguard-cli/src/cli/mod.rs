//! CLI for the phishguard URL classifier.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use phishguard_core::config::{self, PhishguardConfig};
use phishguard_core::ModelBundle;
use std::path::{Path, PathBuf};

use commands::{run_bundle_info, run_completions, run_features, run_predict, run_serve};

/// Top-level CLI for the phishguard URL classifier.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "phishguard: lexical phishing URL classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a URL as PHISHING or LEGIT.
    Predict {
        /// URL to classify; a missing scheme is treated as http.
        url: String,

        /// Model bundle (JSON). Defaults to `bundle_path` from config.toml.
        #[arg(long, short = 'b', value_name = "PATH")]
        bundle: Option<PathBuf>,

        /// Probability at or above which the URL is PHISHING (default from config, 0.464).
        #[arg(long, short = 't', value_name = "T", value_parser = parse_threshold)]
        threshold: Option<f64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print the first feature values and the raw verdict line.
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Print the feature vector extracted from a URL.
    Features {
        url: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Load a model bundle and describe it.
    BundleInfo {
        #[arg(long, short = 'b', value_name = "PATH")]
        bundle: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run the local HTTP prediction service used by the browser extension.
    Serve {
        #[arg(long, short = 'b', value_name = "PATH")]
        bundle: Option<PathBuf>,

        /// Listen address (default from config, 127.0.0.1:5000).
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Default threshold for requests that do not send one.
        #[arg(long, short = 't', value_name = "T", value_parser = parse_threshold)]
        threshold: Option<f64>,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let t: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(format!("threshold must be within [0, 1], got {t}"))
    }
}

/// `--bundle` wins over `bundle_path` in the config.
fn resolve_bundle_path(flag: Option<PathBuf>, cfg: &PhishguardConfig) -> Result<PathBuf> {
    flag.or_else(|| cfg.bundle_path.clone())
        .context("no model bundle given: pass --bundle or set bundle_path in config.toml")
}

fn load_bundle(path: &Path) -> Result<ModelBundle> {
    ModelBundle::load(path).with_context(|| format!("load model bundle {}", path.display()))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().command.run().await
    }

    /// Whether this command reads config.toml. `features` and `completions`
    /// work without one, so a missing or broken config never blocks them.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            CliCommand::Features { .. } | CliCommand::Completions { .. }
        )
    }

    pub async fn run(self) -> Result<()> {
        let cfg = if self.needs_config() {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            PhishguardConfig::default()
        };

        match self {
            CliCommand::Predict {
                url,
                bundle,
                threshold,
                format,
                verbose,
            } => {
                let path = resolve_bundle_path(bundle, &cfg)?;
                let bundle = load_bundle(&path)?;
                let threshold = threshold.unwrap_or(cfg.threshold);
                run_predict(&bundle, &url, threshold, format, verbose)?;
            }
            CliCommand::Features { url, format } => run_features(&url, format)?,
            CliCommand::BundleInfo { bundle, format } => {
                let path = resolve_bundle_path(bundle, &cfg)?;
                let bundle = load_bundle(&path)?;
                run_bundle_info(&path, &bundle, format)?;
            }
            CliCommand::Serve {
                bundle,
                bind,
                threshold,
            } => {
                let path = resolve_bundle_path(bundle, &cfg)?;
                let bundle = load_bundle(&path)?;
                let bind = bind.unwrap_or_else(|| cfg.server().bind);
                let threshold = threshold.unwrap_or(cfg.threshold);
                run_serve(&path, bundle, &bind, threshold).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
