use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use crate::record::MissingExitCode;

/// Global configuration loaded from `~/.config/rsynclog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RsyncLogConfig {
    /// Log to convert when `--input` is not given.
    #[serde(default)]
    pub input_path: Option<PathBuf>,
    /// JSON file to write when `--output` is not given.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Value for every record's `source` field; the local host name when unset.
    #[serde(default)]
    pub source_host: Option<String>,
    /// Indent the JSON output.
    #[serde(default)]
    pub pretty_json: bool,
    /// What to record for a job that never logs an exit code: "absent" (null) or "legacy" (1).
    #[serde(default)]
    pub missing_exit_code: MissingExitCode,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rsynclog")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RsyncLogConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<RsyncLogConfig> {
    if !path.exists() {
        let default_cfg = RsyncLogConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RsyncLogConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
