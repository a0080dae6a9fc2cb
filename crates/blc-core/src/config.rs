use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::PathPolicy;

/// Number of sample entries shown in reports when not configured.
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;

/// Global configuration loaded from `~/.config/blc/config.toml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlcConfig {
    /// Trailing-slash policy: "trailing-slash" (default) or "strip".
    pub path_policy: PathPolicy,
    /// Maximum number of entries listed in report samples.
    pub sample_limit: usize,
}

impl Default for BlcConfig {
    fn default() -> Self {
        Self {
            path_policy: PathPolicy::default(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

/// Path of an existing config file under the XDG config home, if any.
pub fn default_config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("blc")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from `explicit`, else from the XDG default location.
///
/// The default file is optional and never created; built-in defaults apply
/// when it does not exist. An explicit path must exist.
pub fn load(explicit: Option<&Path>) -> Result<BlcConfig> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path()?,
    };

    let Some(path) = path else {
        tracing::debug!("no config file, using defaults");
        return Ok(BlcConfig::default());
    };

    let data =
        fs::read_to_string(&path).with_context(|| format!("read config {}", path.display()))?;
    let cfg = from_toml(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Parse configuration from TOML text.
pub fn from_toml(data: &str) -> Result<BlcConfig> {
    Ok(toml::from_str(data)?)
}
