//! Configuration file loading with precedence handling.

use crate::model::{SelectorOption, DEFAULT_PAGE_SIZE};
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Title shown when none is configured.
pub const DEFAULT_TITLE: &str = "All Event data";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value {value:?} for {var}")]
    InvalidEnvValue {
        /// Environment variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// No API base URL from any source.
    #[error("No API base URL: set api_base_url in the config file, EVLIST_API_URL, or --api-url")]
    MissingApiUrl,

    /// The API base URL does not parse.
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidApiUrl {
        /// The configured URL.
        url: String,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/evlist/config.toml`.
///
/// ```toml
/// api_base_url = "https://events.example.com/api/events"
/// page_size = 50
///
/// [[locations]]
/// id = "north"
/// name = "North site"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Endpoint the results are fetched from.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Screen title.
    #[serde(default)]
    pub title: Option<String>,

    /// Initial page size.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Per-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Location selector options.
    #[serde(default)]
    pub locations: Option<Vec<SelectorOption>>,

    /// Zone selector options.
    #[serde(default)]
    pub zones: Option<Vec<SelectorOption>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API base URL, unvalidated until [`ResolvedConfig::api_url`].
    pub api_base_url: Option<String>,
    /// Screen title.
    pub title: String,
    /// Initial page size (>= 1).
    pub page_size: u32,
    /// Per-request timeout.
    pub request_timeout: Option<Duration>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Location selector options.
    pub locations: Vec<SelectorOption>,
    /// Zone selector options.
    pub zones: Vec<SelectorOption>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            title: DEFAULT_TITLE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
            log_file_path: default_log_path(),
            locations: Vec::new(),
            zones: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// The validated API base URL.
    ///
    /// # Errors
    ///
    /// `MissingApiUrl` when no source provided one, `InvalidApiUrl` when it
    /// does not parse or cannot carry a query string.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: raw.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        Ok(url)
    }
}

/// CLI values that override every other source when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url`
    pub api_url: Option<String>,
    /// `--page-size`
    pub page_size: Option<u32>,
    /// `--title`
    pub title: Option<String>,
    /// `--timeout-secs`
    pub timeout_secs: Option<u64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/evlist/evlist.log` on Unix-like systems, or the
/// platform equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("evlist").join("evlist.log")
    } else {
        PathBuf::from("evlist.log")
    }
}

/// Resolve default config file path (`~/.config/evlist/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("evlist").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `EVLIST_CONFIG` environment variable
/// 3. Default path `~/.config/evlist/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("EVLIST_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. A page size of 0 counts as unset.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_base_url: config.api_base_url.or(defaults.api_base_url),
        title: config.title.unwrap_or(defaults.title),
        page_size: config
            .page_size
            .filter(|&size| size > 0)
            .unwrap_or(defaults.page_size),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        locations: config.locations.unwrap_or(defaults.locations),
        zones: config.zones.unwrap_or(defaults.zones),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `EVLIST_API_URL`: Override API base URL
/// - `EVLIST_PAGE_SIZE`: Override page size (positive integer)
///
/// # Errors
///
/// `InvalidEnvValue` when `EVLIST_PAGE_SIZE` is not a positive integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(url) = std::env::var("EVLIST_API_URL") {
        config.api_base_url = Some(url);
    }

    if let Ok(raw) = std::env::var("EVLIST_PAGE_SIZE") {
        config.page_size = raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&size| size > 0)
            .ok_or(ConfigError::InvalidEnvValue {
                var: "EVLIST_PAGE_SIZE",
                value: raw.clone(),
            })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_url {
        config.api_base_url = Some(url);
    }

    if let Some(size) = cli.page_size.filter(|&size| size > 0) {
        config.page_size = size;
    }

    if let Some(title) = cli.title {
        config.title = title;
    }

    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Some(Duration::from_secs(secs));
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
