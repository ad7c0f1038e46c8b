//! Site configuration

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where content comes from and where the site goes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the Markdown content tree
    pub content_dir: PathBuf,

    /// Files copied as-is into the output
    pub static_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,

    /// Output directory, recreated on every build
    pub output_dir: PathBuf,

    /// Prefix substituted for root-relative `href="/` and `src="/`
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }
}
