pub mod api;
pub mod models;

pub use api::{LookupOrchestrator, RequestExecutor, RequestOutcome, RetryPolicy};
pub use models::{AggregateResult, MatchSummary, PlayerIdentity, RankStanding};
