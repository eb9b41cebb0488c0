use crate::constants::{self, env_vars};
use crate::error::AppError;
use crate::stats_fetcher::api::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Riot API key sent with every request.
    pub api_key: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Total attempts per request when the transport fails.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed pause between attempts, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Continental host for match endpoints.
    #[serde(default = "default_match_host")]
    pub match_host: String,
    /// Region code to platform host.
    #[serde(default = "default_regions")]
    pub regions: BTreeMap<String, String>,
    #[serde(default = "default_region")]
    pub default_region: String,
    /// Upper bound for a whole lookup. No bound when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_deadline_seconds: Option<u64>,
    /// Data Dragon release used for profile icon thumbnails.
    #[serde(default = "default_icon_cdn_version")]
    pub icon_cdn_version: String,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_max_attempts() -> u32 {
    constants::retry::MAX_ATTEMPTS
}

fn default_retry_delay_ms() -> u64 {
    constants::retry::DELAY_MS
}

fn default_match_host() -> String {
    constants::DEFAULT_MATCH_HOST.to_string()
}

fn default_regions() -> BTreeMap<String, String> {
    constants::DEFAULT_REGIONS
        .iter()
        .map(|(code, base)| (code.to_string(), base.to_string()))
        .collect()
}

fn default_region() -> String {
    constants::DEFAULT_REGION.to_string()
}

fn default_icon_cdn_version() -> String {
    constants::reply::DEFAULT_ICON_CDN_VERSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            match_host: default_match_host(),
            regions: default_regions(),
            default_region: default_region(),
            lookup_deadline_seconds: None,
            icon_cdn_version: default_icon_cdn_version(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts for the API key and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `LOL_STATS_API_KEY` - Override API key
    /// - `LOL_STATS_LOG_FILE` - Override log file path
    /// - `LOL_STATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    /// - `LOL_STATS_MATCH_HOST` - Override the continental match host
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            Config {
                api_key,
                ..Config::default()
            }
        } else {
            let api_key = prompt_for_api_key().await?;

            let config = Config {
                api_key,
                ..Config::default()
            };

            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `LOL_STATS_*` environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(match_host) = std::env::var(env_vars::MATCH_HOST) {
            self.match_host = match_host;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Platform host for a region code, if the code is supported.
    pub fn region_base(&self, region: &str) -> Option<&str> {
        self.regions.get(region).map(String::as_str)
    }

    /// Supported region codes, alphabetically.
    pub fn supported_regions(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.retry_delay_ms))
    }

    pub fn lookup_deadline(&self) -> Option<Duration> {
        self.lookup_deadline_seconds.map(Duration::from_secs)
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked; handles the case when no config file exists.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", config.masked_api_key());
            println!("────────────────────────────────────");
            println!("Regions (default: {}):", config.default_region);
            for (code, base) in &config.regions {
                println!("{code:<4}{base}");
            }
            println!("Match host:");
            println!("{}", config.match_host);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("Retries:");
            println!(
                "{} attempts, {} ms apart",
                config.max_attempts, config.retry_delay_ms
            );
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/lol_stats.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the configured hosts so URL joining stays predictable.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut normalized = self.clone();
        normalized.match_host = normalized.match_host.trim_end_matches('/').to_string();
        for base in normalized.regions.values_mut() {
            *base = base.trim_end_matches('/').to_string();
        }

        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
