use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default directory name for the reconstructed tree, relative to the
/// working directory, when neither config nor CLI override it.
pub const DEFAULT_OUTPUT_ROOT: &str = "smap-output";

/// Global configuration loaded from `~/.config/smap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmapConfig {
    /// Directory the reconstructed tree is written under (CLI `--output-dir`
    /// overrides it per run).
    pub output_root: String,
    /// TCP connect timeout in seconds, applied to every request.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds, applied to every request.
    pub request_timeout_secs: u64,
}

impl Default for SmapConfig {
    fn default() -> Self {
        Self {
            output_root: DEFAULT_OUTPUT_ROOT.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SmapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SmapConfig = toml::from_str(&data)?;
    Ok(cfg)
}
