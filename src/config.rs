use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::summary::EmptyDayPolicy;
use crate::theme::ThemeConfig;

/// Overrides `base_url` when set.
pub const BASE_URL_ENV: &str = "CALENDAR_SUMMARY_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    File,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: SourceKind,
    pub base_url: String,
    pub events_file: Option<PathBuf>,
    pub timeout_secs: u64,
    pub empty_day: EmptyDayPolicy,
    pub log_file: Option<PathBuf>,
    pub theme: ThemeConfig,
    /// File this config was read from, if any.
    #[serde(skip)]
    pub origin: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::Http,
            base_url: DEFAULT_BASE_URL.to_string(),
            events_file: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            empty_day: EmptyDayPolicy::default(),
            log_file: None,
            theme: ThemeConfig::default(),
            origin: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_base_url_override(env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.origin = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn apply_base_url_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.base_url = url;
        }
    }

    /// Command line flags win over the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.events_file {
            self.source = SourceKind::File;
            self.events_file = Some(path.clone());
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()));
        }
        match self.source {
            SourceKind::Http if self.base_url.trim().is_empty() => Err(ConfigError::Invalid(
                "base_url is required for the http source".to_string(),
            )),
            SourceKind::File if self.events_file.is_none() => Err(ConfigError::Invalid(
                "events_file is required for the file source".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calendar-summary").join("config.toml"))
}
