//! Application configuration structures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::utils::parse_selector;

/// Optional settings file inside the configuration directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Credential file inside the configuration directory.
pub const SECRET_FILE: &str = "secret.json";

/// History file inside the configuration directory.
pub const HISTORY_FILE: &str = "history.json";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `secret.json`, `history.json` and `config.toml`
    #[serde(skip)]
    pub config_dir: PathBuf,

    /// Page to scrape and where the links live on it
    #[serde(default)]
    pub source: SourceConfig,

    /// Bookmarking endpoint
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// How a run's history relates to the previous one
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Default configuration rooted at `config_dir`.
    pub fn for_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `config.toml` from `config_dir`, or return defaults.
    ///
    /// A missing file is the normal case and is not reported.
    pub fn load_or_default(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let path = config_dir.join(CONFIG_FILE);

        let mut config = match Self::load(&path) {
            Ok(config) => {
                log::debug!("Loaded settings from {}", path.display());
                config
            }
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!(
                    "Config load failed from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        };
        config.config_dir = config_dir;
        config
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        Url::parse(&self.source.url)?;
        Url::parse(&self.api.url)?;
        parse_selector(&self.source.container_selector)?;
        parse_selector(&self.source.link_selector)?;
        parse_selector(&self.source.title_selector)?;
        Ok(())
    }

    pub fn secret_path(&self) -> PathBuf {
        self.config_dir.join(SECRET_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.config_dir.join(HISTORY_FILE)
    }
}

/// Source page location and layout.
///
/// The selectors are tied to the current markup of the page; a layout change
/// degrades to partial or empty extraction rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page to scrape
    #[serde(default = "defaults::source_url")]
    pub url: String,

    /// Element whose direct children are the list items
    #[serde(default = "defaults::container_selector")]
    pub container_selector: String,

    /// Link element within an item
    #[serde(default = "defaults::link_selector")]
    pub link_selector: String,

    /// Title element(s) within an item
    #[serde(default = "defaults::title_selector")]
    pub title_selector: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: defaults::source_url(),
            container_selector: defaults::container_selector(),
            link_selector: defaults::link_selector(),
            title_selector: defaults::title_selector(),
        }
    }
}

/// Bookmarking API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Form-encoded `add` endpoint
    #[serde(default = "defaults::api_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: defaults::api_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// History settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub mode: HistoryMode,
}

/// What the history written at the end of a run contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Only the entries scraped in this run. Links that drop off the page
    /// are forgotten.
    #[default]
    Replace,

    /// The previous history plus any newly scraped entries.
    Accumulate,
}

mod defaults {
    pub fn source_url() -> String {
        "https://hatenablog.com".into()
    }
    pub fn container_selector() -> String {
        "div.serviceTop-staffPicks-list".into()
    }
    pub fn link_selector() -> String {
        "a".into()
    }
    pub fn title_selector() -> String {
        ".entry-title".into()
    }
    pub fn api_url() -> String {
        "https://www.instapaper.com/api/add".into()
    }
    pub fn user_agent() -> String {
        concat!("hbre2ip/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn timeout() -> u64 {
        30
    }
}
