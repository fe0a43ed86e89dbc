//! Site settings, with optional overrides baked in at build time.

use thiserror::Error;

use crate::download::{DownloadError, DownloadMode, DownloadRequest};
use crate::reveal::{RevealOptions, ThresholdError};

pub const DOWNLOAD_URL: &str =
    "https://github.com/tanishtirpathi/First-desktop-app-/releases/download/mindpin/win-unpacked.zip";
pub const DOWNLOAD_FILENAME: &str = "MindPin-win-unpacked.zip";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MINDPIN_REVEAL_THRESHOLD: {0}")]
    Threshold(#[from] ThresholdError),
    #[error("{key}: {source}")]
    Download {
        key: &'static str,
        source: DownloadError,
    },
    #[error("MINDPIN_LOG_LEVEL: unknown level {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub download_url: String,
    pub download_filename: Option<String>,
    /// Strategy for the hero button. The navbar always navigates.
    pub download_mode: DownloadMode,
    pub reveal: RevealOptions,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            download_url: DOWNLOAD_URL.to_string(),
            download_filename: Some(DOWNLOAD_FILENAME.to_string()),
            download_mode: DownloadMode::SynthesizeLink,
            reveal: RevealOptions::default(),
            log_level: log::Level::Info,
        }
    }
}

/// Overrides captured from the build environment.
fn compiled(key: &str) -> Option<String> {
    let value = match key {
        "MINDPIN_DOWNLOAD_URL" => option_env!("MINDPIN_DOWNLOAD_URL"),
        "MINDPIN_DOWNLOAD_FILENAME" => option_env!("MINDPIN_DOWNLOAD_FILENAME"),
        "MINDPIN_DOWNLOAD_MODE" => option_env!("MINDPIN_DOWNLOAD_MODE"),
        "MINDPIN_REVEAL_THRESHOLD" => option_env!("MINDPIN_REVEAL_THRESHOLD"),
        "MINDPIN_REVEAL_ROOT_MARGIN" => option_env!("MINDPIN_REVEAL_ROOT_MARGIN"),
        "MINDPIN_LOG_LEVEL" => option_env!("MINDPIN_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

impl SiteConfig {
    /// Load with build-time overrides. Rejected overrides are returned so they
    /// can be logged once logging is up; their defaults stay in effect.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(compiled)
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut problems = Vec::new();

        if let Some(url) = lookup("MINDPIN_DOWNLOAD_URL") {
            match DownloadRequest::new(&url, None) {
                Ok(_) => config.download_url = url,
                Err(source) => problems.push(ConfigError::Download {
                    key: "MINDPIN_DOWNLOAD_URL",
                    source,
                }),
            }
        }
        if let Some(name) = lookup("MINDPIN_DOWNLOAD_FILENAME") {
            // Empty clears the hint; the URL path supplies the name instead.
            config.download_filename = Some(name).filter(|n| !n.trim().is_empty());
        }
        if let Some(mode) = lookup("MINDPIN_DOWNLOAD_MODE") {
            match mode.parse() {
                Ok(mode) => config.download_mode = mode,
                Err(source) => problems.push(ConfigError::Download {
                    key: "MINDPIN_DOWNLOAD_MODE",
                    source,
                }),
            }
        }
        if let Some(threshold) = lookup("MINDPIN_REVEAL_THRESHOLD") {
            match threshold.parse() {
                Ok(threshold) => config.reveal.threshold = threshold,
                Err(e) => problems.push(ConfigError::from(e)),
            }
        }
        if let Some(margin) = lookup("MINDPIN_REVEAL_ROOT_MARGIN") {
            config.reveal.root_margin = margin;
        }
        if let Some(level) = lookup("MINDPIN_LOG_LEVEL") {
            match level.parse() {
                Ok(level) => config.log_level = level,
                Err(_) => problems.push(ConfigError::LogLevel(level)),
            }
        }

        (config, problems)
    }

    /// A fresh request for one click.
    pub fn download_request(&self) -> Result<DownloadRequest, DownloadError> {
        DownloadRequest::new(&self.download_url, self.download_filename.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let (config, problems) = SiteConfig::from_lookup(|_| None);
        assert!(problems.is_empty());
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.reveal.threshold.value(), 0.1);

        let request = config.download_request().expect("default request is valid");
        assert_eq!(request.source_url(), DOWNLOAD_URL);
        assert_eq!(request.suggested_filename(), Some(DOWNLOAD_FILENAME));
    }

    #[test]
    fn applies_valid_overrides() {
        let (config, problems) = SiteConfig::from_lookup(lookup(&[
            ("MINDPIN_DOWNLOAD_URL", "https://example.com/app.zip"),
            ("MINDPIN_DOWNLOAD_FILENAME", "App.zip"),
            ("MINDPIN_DOWNLOAD_MODE", "navigate"),
            ("MINDPIN_REVEAL_THRESHOLD", "0.25"),
            ("MINDPIN_REVEAL_ROOT_MARGIN", "0px 0px -50px 0px"),
            ("MINDPIN_LOG_LEVEL", "debug"),
        ]));
        assert!(problems.is_empty());
        assert_eq!(config.download_url, "https://example.com/app.zip");
        assert_eq!(config.download_filename.as_deref(), Some("App.zip"));
        assert_eq!(config.download_mode, DownloadMode::Navigate);
        assert_eq!(config.reveal.threshold.value(), 0.25);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn rejected_overrides_keep_defaults() {
        let (config, problems) = SiteConfig::from_lookup(lookup(&[
            ("MINDPIN_DOWNLOAD_URL", "not a url"),
            ("MINDPIN_DOWNLOAD_MODE", "carrier-pigeon"),
            ("MINDPIN_REVEAL_THRESHOLD", "2"),
            ("MINDPIN_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(problems.len(), 4);
        assert!(matches!(problems[2], ConfigError::Threshold(ThresholdError::OutOfRange(_))));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn blank_filename_clears_hint() {
        let (config, _) = SiteConfig::from_lookup(lookup(&[("MINDPIN_DOWNLOAD_FILENAME", " ")]));
        assert_eq!(config.download_filename, None);
        let request = config.download_request().expect("valid request");
        assert_eq!(request.link_filename(), Ok("win-unpacked.zip".to_string()));
    }
}
