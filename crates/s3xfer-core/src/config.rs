use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::headers::names::{DEFAULT_MAX_PART_SIZE, DEFAULT_PART_SIZE};
use crate::planner::PartRange;

/// Default sub-range to plan when none is given on the command line
/// (optional `[range]` section in config.toml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl From<RangeConfig> for PartRange {
    fn from(r: RangeConfig) -> Self {
        PartRange::new(r.start, r.end)
    }
}

/// Global configuration loaded from `~/.config/s3xfer/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XferConfig {
    /// Target size of each part in bytes.
    pub part_size: u64,
    /// Largest part size the client will use.
    #[serde(default = "default_max_part_size")]
    pub max_part_size: u64,
    /// Optional default range; if missing, commands require one.
    #[serde(default)]
    pub range: Option<RangeConfig>,
}

fn default_max_part_size() -> u64 {
    DEFAULT_MAX_PART_SIZE
}

impl Default for XferConfig {
    fn default() -> Self {
        Self {
            part_size: DEFAULT_PART_SIZE,
            max_part_size: DEFAULT_MAX_PART_SIZE,
            range: None,
        }
    }
}

impl XferConfig {
    /// Rejects unusable values. A max part size below the part size is raised to it.
    pub fn validate(mut self) -> Result<Self> {
        if self.part_size == 0 {
            bail!("part_size must be nonzero");
        }
        if self.max_part_size < self.part_size {
            tracing::warn!(
                "max_part_size {} is below part_size {}; raising it to part_size",
                self.max_part_size,
                self.part_size
            );
            self.max_part_size = self.part_size;
        }
        if let Some(r) = self.range {
            if r.start > r.end {
                bail!("range start {} is after range end {}", r.start, r.end);
            }
        }
        Ok(self)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("s3xfer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<XferConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = XferConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<XferConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: XferConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
}
