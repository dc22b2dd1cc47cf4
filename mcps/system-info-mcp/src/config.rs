//! Configuration loading for system-info-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables SYSTEM_INFO_LOCALE and SYSTEM_INFO_TIMEOUT_MS
//! 2. Environment variable SYSTEM_INFO_CONFIG_PATH
//! 3. ~/.binks/system-info.toml
//! 4. Default values

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

/// How reports are produced and presented
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output language: "en" or "zh"
    #[serde(default)]
    pub locale: Locale,
    /// Deadline for one batch of provider queries
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,
}

fn default_provider_timeout_ms() -> u64 {
    10_000
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            provider_timeout_ms: default_provider_timeout_ms(),
        }
    }
}

impl ReportConfig {
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = match config_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_overrides(
            std::env::var("SYSTEM_INFO_LOCALE").ok().as_deref(),
            std::env::var("SYSTEM_INFO_TIMEOUT_MS").ok().as_deref(),
        )?;

        Ok(config)
    }

    fn from_file(path: &std::path::Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Environment values win over the file
    fn apply_overrides(&mut self, locale: Option<&str>, timeout_ms: Option<&str>) -> Result<()> {
        if let Some(locale) = locale {
            self.report.locale = locale.parse::<Locale>().context("SYSTEM_INFO_LOCALE")?;
        }
        if let Some(timeout_ms) = timeout_ms {
            self.report.provider_timeout_ms = timeout_ms
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SYSTEM_INFO_TIMEOUT_MS: invalid value '{timeout_ms}'"))?;
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SYSTEM_INFO_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".binks").join("system-info.toml");
            return Some(path);
        }

        None
    }
}
