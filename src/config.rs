//! Site configuration module.
//!
//! Handles loading, validating, and layering the blog configuration. Stock
//! defaults reproduce the original hardcoded site; a TOML file overrides any
//! subset of them, and the `--source`/`--output` CLI flags override the file.
//!
//! ## Config File Location
//!
//! The config file lives next to where the tool is run, not inside the
//! content directory (the content directory is copied verbatim into the
//! output, so a config placed there would be published):
//!
//! ```text
//! .
//! ├── simple-blog.toml     # Optional; absent = stock defaults
//! ├── temp-notes/          # Content source
//! └── public/              # Generated site (destroyed on every build)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "temp-notes"
//! output_dir = "public"
//! site_name = "我的博客"
//! site_description = "记录学习、分享技术、探索生活"
//! lang = "zh-CN"
//! on_error = "abort"        # "abort" or "skip"
//!
//! [labels]
//! back_home = "← 返回首页"
//! read_more = "点击阅读 →"
//! footer_note = "使用 GitHub Pages 构建."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "simple-blog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration.
///
/// All fields have defaults matching the original hardcoded blog. User config
/// files need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the Markdown posts and any co-located assets.
    pub content_root: PathBuf,
    /// Directory the site is generated into. Wiped on every build.
    pub output_dir: PathBuf,
    /// Shown in the index header, the footer, and every page `<title>`.
    pub site_name: String,
    /// Tagline under the site name on the index page.
    pub site_description: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// What to do when a single post cannot be read or written.
    pub on_error: ErrorPolicy,
    /// Fixed interface strings.
    pub labels: LabelsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("temp-notes"),
            output_dir: PathBuf::from("public"),
            site_name: "我的博客".to_string(),
            site_description: "记录学习、分享技术、探索生活".to_string(),
            lang: "zh-CN".to_string(),
            on_error: ErrorPolicy::default(),
            labels: LabelsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable for a build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name must not be empty".into()));
        }
        if self.content_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.content_root == self.output_dir {
            return Err(ConfigError::Validation(
                "output_dir must differ from content_root".into(),
            ));
        }
        Ok(())
    }

    /// Apply CLI path overrides on top of the loaded config, then re-validate.
    pub fn with_overrides(
        mut self,
        content_root: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(root) = content_root {
            self.content_root = root;
        }
        if let Some(out) = output_dir {
            self.output_dir = out;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Per-post failure handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Any post failure aborts the whole build.
    #[default]
    Abort,
    /// Report the failure, leave the post out of the index, keep going.
    Skip,
}

/// Interface strings rendered around the content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    /// Text of the link from every post back to the index.
    pub back_home: String,
    /// Affordance under each title on the index.
    pub read_more: String,
    /// Trailing sentence of the footer, after the copyright line.
    pub footer_note: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            back_home: "← 返回首页".to_string(),
            read_more: "点击阅读 →".to_string(),
            footer_note: "使用 GitHub Pages 构建.".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer that user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config.
///
/// - `Some(path)`: the file must exist.
/// - `None`: [`DEFAULT_CONFIG_FILE`] in the working directory is used if
///   present, stock defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Some(load_raw_config(default_path)?)
            } else {
                None
            }
        }
    };
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Blog Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Save as simple-blog.toml in the directory you run simple-blog from,
# or pass --config <file>. Unknown keys will cause an error.

# Directory holding the Markdown posts and their assets (images, etc.).
# Only *.md files directly inside it become posts; everything is copied.
content_root = "temp-notes"

# Generated site. This directory is DELETED and rebuilt on every run.
output_dir = "public"

# Shown in the index header, the footer, and each page title.
site_name = "我的博客"

# Tagline under the site name on the index page.
site_description = "记录学习、分享技术、探索生活"

# <html lang="..."> attribute.
lang = "zh-CN"

# What happens when one post cannot be read or written:
#   "abort" - stop the build (default)
#   "skip"  - report it, leave it out of the index, and continue
on_error = "abort"

# ---------------------------------------------------------------------------
# Interface strings
# ---------------------------------------------------------------------------
[labels]
# Link from every post back to the index.
back_home = "← 返回首页"

# Shown under each post title on the index.
read_more = "点击阅读 →"

# Appended to the footer copyright line.
footer_note = "使用 GitHub Pages 构建."
"##
}
