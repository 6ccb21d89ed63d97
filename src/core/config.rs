//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.treasure-hunter/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing in it is persisted back: favorites and selections live only for
//! the session.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::Page;
use crate::lookup::DEFAULT_GEM_LIMIT;
use crate::lookup::providers::{DEFAULT_COUNTRIES_BASE_URL, DEFAULT_YELP_BASE_URL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TreasureConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub countries: CountriesConfig,
    #[serde(default)]
    pub yelp: YelpConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<String>,
    pub show_welcome: Option<bool>,
    pub gem_limit: Option<usize>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountriesConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct YelpConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Yelp rejects larger page sizes.
pub const MAX_GEM_LIMIT: usize = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_page: Page,
    pub show_welcome: bool,
    pub gem_limit: usize,
    pub request_timeout: Duration,
    pub countries_base_url: String,
    pub yelp_api_key: Option<String>,
    pub yelp_base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.treasure-hunter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".treasure-hunter").join("config.toml"))
}

/// Load config from `~/.treasure-hunter/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TreasureConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TreasureConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TreasureConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TreasureConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TreasureConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: start_page={:?}, gem_limit={:?}, yelp key set={}",
        config.general.start_page,
        config.general.gem_limit,
        config.yelp.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Treasure Hunter Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = "home"                # "home" or "hidden-gems"
# show_welcome = true
# gem_limit = 5                      # 1..=50
# request_timeout_secs = 10

# [countries]
# base_url = "https://restcountries.com/v3.1"   # Or set COUNTRIES_BASE_URL

# [yelp]
# api_key = "..."                    # Or set YELP_API_KEY env var
# base_url = "https://api.yelp.com/v3"          # Or set YELP_BASE_URL
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_page` is the `--page` flag (None = not specified); `skip_welcome` is `--skip-welcome`.
pub fn resolve(config: &TreasureConfig, cli_page: Option<Page>, skip_welcome: bool) -> ResolvedConfig {
    // Start page: CLI → env → config → default
    let start_page = cli_page
        .or_else(|| parse_page(std::env::var("TREASURE_HUNTER_PAGE").ok().as_deref()))
        .or_else(|| parse_page(config.general.start_page.as_deref()))
        .unwrap_or_default();

    let show_welcome = !skip_welcome && config.general.show_welcome.unwrap_or(true);

    let gem_limit = config
        .general
        .gem_limit
        .unwrap_or(DEFAULT_GEM_LIMIT)
        .clamp(1, MAX_GEM_LIMIT);

    // A zero timeout would fail every request before it is sent
    let request_timeout_secs = match config.general.request_timeout_secs {
        Some(0) => {
            warn!(
                "request_timeout_secs = 0 would fail every lookup, using {}",
                DEFAULT_REQUEST_TIMEOUT_SECS
            );
            DEFAULT_REQUEST_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_REQUEST_TIMEOUT_SECS,
    };
    let request_timeout = Duration::from_secs(request_timeout_secs);

    // Countries base URL: env → config → default
    let countries_base_url = std::env::var("COUNTRIES_BASE_URL")
        .ok()
        .or_else(|| config.countries.base_url.clone())
        .unwrap_or_else(|| DEFAULT_COUNTRIES_BASE_URL.to_string());

    // Yelp API key: env → config. Never defaulted.
    let yelp_api_key = std::env::var("YELP_API_KEY")
        .ok()
        .or_else(|| config.yelp.api_key.clone());

    // Yelp base URL: env → config → default
    let yelp_base_url = std::env::var("YELP_BASE_URL")
        .ok()
        .or_else(|| config.yelp.base_url.clone())
        .unwrap_or_else(|| DEFAULT_YELP_BASE_URL.to_string());

    ResolvedConfig {
        start_page,
        show_welcome,
        gem_limit,
        request_timeout,
        countries_base_url,
        yelp_api_key,
        yelp_base_url,
    }
}

fn parse_page(value: Option<&str>) -> Option<Page> {
    let value = value?;
    match Page::from_str(value, true) {
        Ok(page) => Some(page),
        Err(_) => {
            warn!("Unknown start page '{}', ignoring", value);
            None
        }
    }
}
