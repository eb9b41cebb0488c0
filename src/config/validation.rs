use super::Config;
use crate::error::AppError;
use std::path::Path;

fn is_http_url(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://"))
        && !value
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .is_empty()
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty
/// - Region table cannot be empty and every host must be an http(s) URL
/// - The default region must be one of the configured regions
/// - The match host must be an http(s) URL
/// - At least one attempt per request
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if config.regions.is_empty() {
        return Err(AppError::config_error(
            "At least one region must be configured",
        ));
    }

    for (code, base) in &config.regions {
        if !is_http_url(base) {
            return Err(AppError::config_error(format!(
                "Region '{code}' host must be an http(s) URL, got '{base}'"
            )));
        }
    }

    if !config.regions.contains_key(&config.default_region) {
        return Err(AppError::config_error(format!(
            "Default region '{}' is not in the region table",
            config.default_region
        )));
    }

    if !is_http_url(&config.match_host) {
        return Err(AppError::config_error(format!(
            "Match host must be an http(s) URL, got '{}'",
            config.match_host
        )));
    }

    if config.max_attempts == 0 {
        return Err(AppError::config_error(
            "max_attempts must be at least 1",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
