use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sitemap::DEFAULT_RESPONSE_LEN_LIMIT;

/// What to do with items whose decoded response exceeds `response_len_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizePolicy {
    /// List the item in the summary and import it anyway.
    #[default]
    Report,
    /// List the item in the summary and do not import it.
    Exclude,
}

/// Global configuration loaded from `~/.config/smi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Directory scanned for exports, relative to the working directory unless absolute.
    pub sitemap_dir: PathBuf,
    /// File extension (without the dot) an export must have. Case-sensitive.
    pub file_extension: String,
    /// Decoded response size, in bytes, above which an item counts as oversized.
    pub response_len_limit: usize,
    /// Oversized items: "report" (default) or "exclude".
    #[serde(default)]
    pub oversize_policy: OversizePolicy,
    /// Record a failing file in its summary and move on instead of aborting the run.
    #[serde(default)]
    pub continue_on_error: bool,
    /// Print every parsed item before submitting it.
    #[serde(default)]
    pub print_items: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sitemap_dir: PathBuf::from("source_sitemap"),
            file_extension: "xml".to_string(),
            response_len_limit: DEFAULT_RESPONSE_LEN_LIMIT,
            oversize_policy: OversizePolicy::Report,
            continue_on_error: false,
            print_items: false,
        }
    }
}

impl ImportConfig {
    /// `sitemap_dir` resolved against `base` (usually the working directory).
    pub fn sitemap_dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.sitemap_dir)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImportConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ImportConfig> {
    if !path.exists() {
        let default_cfg = ImportConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ImportConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
