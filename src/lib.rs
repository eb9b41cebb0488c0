//! League of Legends player stats from the Riot API
//!
//! This library resolves a summoner on a regional platform, then gathers
//! their ranked-solo standing and last five matches and reduces them to a
//! single [`AggregateResult`]. Results and failures both turn into a
//! [`Reply`] card for display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lol_stats::{AppError, Config, LookupOrchestrator, Reply};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let orchestrator = LookupOrchestrator::from_config(&config)?;
//!
//!     let reply = match orchestrator.run("Faker", "kr").await {
//!         Ok(result) => Reply::from_result("Faker", &result, &config.icon_cdn_version),
//!         Err(failure) => Reply::from_failure(&failure, &config.supported_regions()),
//!     };
//!
//!     lol_stats::reply::render_card(&mut std::io::stdout(), &reply)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod reply;
pub mod stats_fetcher;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, LookupFailure, TransportError};
pub use reply::Reply;
pub use stats_fetcher::api::{HttpTransport, LookupOrchestrator, RequestExecutor, RetryPolicy};
pub use stats_fetcher::models::AggregateResult;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
