//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{Layout, Section};
use crate::export::ExporterConfig;

/// Section used when neither the CLI nor the config file names one.
pub const DEFAULT_SECTION: &str = "posts";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default site root directory
    pub site_dir: Option<PathBuf>,

    /// Default content section
    pub section: Option<String>,

    /// Write page bundles instead of flat files
    pub page_bundle: Option<bool>,

    /// External exporter invocation
    pub exporter: Option<ExporterConfig>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing default config file yields the default config; a missing
    /// explicitly requested file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/nbhugo/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nbhugo")
            .join("config.toml")
    }

    /// Resolve the site root, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--site-dir` argument
    /// 2. Config file `site_dir` setting
    /// 3. Current working directory
    pub fn site_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.site_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve and validate the content section.
    ///
    /// Precedence order:
    /// 1. CLI `--section` argument
    /// 2. Config file `section` setting
    /// 3. `posts`
    pub fn section(&self, cli_section: Option<&str>) -> Result<Section> {
        let raw = cli_section
            .or(self.section.as_deref())
            .unwrap_or(DEFAULT_SECTION);
        Ok(Section::new(raw)?)
    }

    /// Resolve the layout from `--page-bundle`/`--flat`, then the config
    /// file, then flat.
    pub fn layout(&self, cli_page_bundle: Option<bool>) -> Layout {
        Layout::from_page_bundle(cli_page_bundle.or(self.page_bundle).unwrap_or(false))
    }

    /// The exporter configuration, defaulting to `jupyter nbconvert`.
    pub fn exporter(&self) -> ExporterConfig {
        self.exporter.clone().unwrap_or_default()
    }
}
