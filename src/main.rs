// src/main.rs
use clap::Parser;
use lol_stats::AppError;
use lol_stats::cli::{Args, is_config_mode};
use lol_stats::commands::{
    handle_config_update_command, handle_list_config_command, handle_lookup_command,
    handle_usage_command,
};
use lol_stats::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard flushes buffered log lines when dropped at the end of main.
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_mode(&args) {
        return handle_config_update_command(&args).await;
    }

    match args.player.as_deref().map(str::trim) {
        Some(player) if !player.is_empty() => handle_lookup_command(&args, player).await,
        _ => handle_usage_command(),
    }
}
