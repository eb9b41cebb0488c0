use crate::cli::Args;
use crate::config::Config;
use crate::config::user_prompts::prompt_for_api_key;
use crate::error::AppError;
use crate::reply::{Reply, render_card};
use crate::stats_fetcher::api::{HttpTransport, LookupOrchestrator};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use tracing::{info, warn};

const WINDOW_TITLE: &str = "LoL stats";

/// Region code to use for a lookup: the `--region` argument trimmed and
/// lowercased, or the configured default.
pub fn resolve_region(requested: Option<&str>, config: &Config) -> String {
    requested
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| config.default_region.clone())
}

/// Runs one lookup and turns the outcome into a reply card.
///
/// Unsupported regions are answered without touching the network.
pub async fn lookup_reply<T: HttpTransport>(
    orchestrator: &LookupOrchestrator<T>,
    config: &Config,
    player_name: &str,
    region: &str,
) -> Reply {
    if !orchestrator.supports_region(region) {
        return Reply::invalid_region(&config.supported_regions());
    }

    match orchestrator.run(player_name, region).await {
        Ok(result) => Reply::from_result(player_name, &result, &config.icon_cdn_version),
        Err(failure) => {
            warn!("Lookup for '{player_name}' on {region} failed: {failure}");
            Reply::from_failure(&failure, &config.supported_regions())
        }
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    Config::display().await
}

/// Handles configuration update commands (--set-api-key, --set-log-file, --clear-log-file).
///
/// An empty `--set-api-key` value prompts for the key. A config file that does
/// not exist yet is created from defaults.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_from_path(&Config::get_config_path())
        .await
        .unwrap_or_default();

    match args.new_api_key.as_deref().map(str::trim) {
        Some("") => config.api_key = prompt_for_api_key().await?,
        Some(key) => config.api_key = key.to_string(),
        None if config.api_key.trim().is_empty() => {
            config.api_key = prompt_for_api_key().await?;
        }
        None => {}
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    info!("Configuration saved to {}", Config::get_config_path());
    println!("Config updated successfully!");

    Ok(())
}

/// Prints the usage card shown when no player is given.
pub fn handle_usage_command() -> Result<(), AppError> {
    render_card(&mut stdout(), &Reply::usage())?;
    Ok(())
}

/// Handles a player lookup and prints the resulting card.
pub async fn handle_lookup_command(args: &Args, player_name: &str) -> Result<(), AppError> {
    let config = Config::load().await?;
    let region = resolve_region(args.region.as_deref(), &config);

    execute!(stdout(), SetTitle(format!("{WINDOW_TITLE} • {player_name}")))?;

    let orchestrator = LookupOrchestrator::from_config(&config)?;
    let reply = lookup_reply(&orchestrator, &config, player_name, &region).await;

    render_card(&mut stdout(), &reply)?;
    Ok(())
}
