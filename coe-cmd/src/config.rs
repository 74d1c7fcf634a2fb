//! CLI configuration: optional TOML file merged with command-line flags.
//!
//! Precedence is flags, then file, then built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use coe_data::DEFAULT_BIN_COUNT;

/// Backend the CLI talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "coe.toml";

/// Contents of a `coe.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Origin the `/api/*` paths are resolved against
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Histogram bucket count for `analysis`
    pub bins: Option<usize>,
}

impl FileConfig {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Invalid TOML in config file")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        Self::parse(&content).with_context(|| format!("In config file '{}'", path.display()))
    }

    /// Load `path` if given, else `coe.toml` in the working directory if it
    /// exists, else nothing.
    pub fn discover(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::info!("[COE] using {}", fallback.display());
            return Self::load(fallback);
        }
        Ok(Self::default())
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub bins: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub bins: usize,
}

impl Settings {
    pub fn resolve(file: FileConfig, flags: Overrides) -> anyhow::Result<Self> {
        let base_url = flags
            .base_url
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = flags
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(coe_core::api::DEFAULT_TIMEOUT.as_secs());
        let bins = flags.bins.or(file.bins).unwrap_or(DEFAULT_BIN_COUNT);

        if timeout_secs == 0 {
            bail!("timeout must be at least 1 second");
        }
        if bins == 0 {
            bail!("bins must be at least 1");
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            bins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::resolve(FileConfig::parse("").unwrap(), Overrides::default()).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.bins, 30);
    }

    #[test]
    fn file_values_apply() {
        let file = FileConfig::parse(
            r#"
            base_url = "http://coe.internal:9000"
            timeout_secs = 5
            bins = 12
            "#,
        )
        .unwrap();
        let settings = Settings::resolve(file, Overrides::default()).unwrap();
        assert_eq!(settings.base_url, "http://coe.internal:9000");
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.bins, 12);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            base_url: Some("http://from-file".to_string()),
            timeout_secs: Some(5),
            bins: Some(12),
        };
        let flags = Overrides {
            base_url: Some("http://from-flag".to_string()),
            timeout_secs: None,
            bins: Some(40),
        };
        let settings = Settings::resolve(file, flags).unwrap();
        assert_eq!(settings.base_url, "http://from-flag");
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.bins, 40);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("base_uri = \"http://typo\"").is_err());
    }

    #[test]
    fn zero_bins_rejected() {
        let flags = Overrides {
            bins: Some(0),
            ..Overrides::default()
        };
        assert!(Settings::resolve(FileConfig::default(), flags).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = FileConfig::discover(Some(Path::new("/nonexistent/coe.toml"))).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }
}
