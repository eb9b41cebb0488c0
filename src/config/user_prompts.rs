//! Prompts used when configuration is missing on first run

use crate::error::AppError;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};

/// Prompts for the Riot API key on stdin until a non-empty key is entered.
///
/// # Example
/// ```no_run
/// use lol_stats::config::user_prompts::prompt_for_api_key;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_key = prompt_for_api_key().await?;
/// println!("Got a key of {} characters", api_key.len());
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    read_api_key(io::BufReader::new(io::stdin())).await
}

async fn read_api_key<R: AsyncBufRead + Unpin>(mut reader: R) -> Result<String, AppError> {
    loop {
        println!("Please enter your Riot API key (RGAPI-...): ");
        let mut input = String::new();
        if reader.read_line(&mut input).await? == 0 {
            return Err(AppError::config_error("No API key entered"));
        }
        let key = input.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
}
