use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Decision threshold chosen during model training.
pub const DEFAULT_THRESHOLD: f64 = 0.464;

/// Default listen address for `phishguard serve` (the browser extension
/// expects port 5000).
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// HTTP service settings (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on, e.g. "127.0.0.1:5000".
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/phishguard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhishguardConfig {
    /// Model bundle used when `--bundle` is not given.
    #[serde(default)]
    pub bundle_path: Option<PathBuf>,
    /// Probability at or above which a URL is labeled PHISHING.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Optional server section; if missing, built-in defaults are used.
    #[serde(default)]
    pub server: Option<ServerConfig>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for PhishguardConfig {
    fn default() -> Self {
        Self {
            bundle_path: None,
            threshold: DEFAULT_THRESHOLD,
            server: None,
        }
    }
}

impl PhishguardConfig {
    /// Server settings, falling back to defaults.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    /// Rejects thresholds outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            anyhow::bail!("threshold must be within [0, 1], got {}", self.threshold);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PhishguardConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
