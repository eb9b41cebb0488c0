use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "lol_stats";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// `<config_dir>/lol_stats`, or `./lol_stats` when the platform has no
/// config directory.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

pub fn get_config_path() -> String {
    app_dir().join(CONFIG_FILE_NAME).to_string_lossy().to_string()
}

pub fn get_log_dir_path() -> String {
    app_dir().join(LOG_DIR_NAME).to_string_lossy().to_string()
}
