// src/stats_fetcher/api/orchestrator.rs - Player lookup pipeline

use futures::FutureExt;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::executor::{RequestExecutor, RequestOutcome};
use super::http_client::{HttpTransport, ReqwestTransport};
use super::urls::{league_entries_url, match_detail_url, match_ids_url, summoner_by_name_url};
use crate::config::Config;
use crate::constants::RECENT_MATCH_COUNT;
use crate::error::{AppError, LookupFailure};
use crate::stats_fetcher::models::{
    AggregateResult, LeagueEntryDto, MatchDto, MatchSummary, PlayerIdentity, RankStanding,
    SummonerDto,
};

/// Message carried by `LookupFailure::Internal` for an unsupported region code.
pub const INVALID_REGION: &str = "invalid region";

/// Runs the player lookup: identity → rank → match list → match details →
/// aggregate.
///
/// Only the identity stage can fail the lookup. Rank, match list and
/// individual matches fall back to the unranked standing, an empty list and
/// a skipped match respectively.
pub struct LookupOrchestrator<T = ReqwestTransport> {
    executor: RequestExecutor<T>,
    regions: BTreeMap<String, String>,
    match_host: String,
    deadline: Option<Duration>,
}

impl LookupOrchestrator<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(Self::new(RequestExecutor::from_config(config)?, config))
    }
}

impl<T: HttpTransport> LookupOrchestrator<T> {
    pub fn new(executor: RequestExecutor<T>, config: &Config) -> Self {
        Self {
            executor,
            regions: config.regions.clone(),
            match_host: config.match_host.clone(),
            deadline: config.lookup_deadline(),
        }
    }

    pub fn supports_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Looks up `player_name` on the platform behind `region`.
    ///
    /// # Example
    /// ```rust,no_run
    /// use lol_stats::config::Config;
    /// use lol_stats::stats_fetcher::api::LookupOrchestrator;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), lol_stats::AppError> {
    ///     let config = Config::load().await?;
    ///     let orchestrator = LookupOrchestrator::from_config(&config)?;
    ///     match orchestrator.run("Faker", "kr").await {
    ///         Ok(result) => println!("{} ({}%)", result.rank.label(), result.winrate),
    ///         Err(failure) => println!("{}", failure.user_message()),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self))]
    pub async fn run(
        &self,
        player_name: &str,
        region: &str,
    ) -> Result<AggregateResult, LookupFailure> {
        let Some(platform_base) = self.regions.get(region) else {
            warn!("Rejected unsupported region '{region}'");
            return Err(LookupFailure::internal(INVALID_REGION));
        };

        info!("Starting lookup for '{player_name}' on {region}");

        let stages = AssertUnwindSafe(self.run_stages(player_name, platform_base)).catch_unwind();
        let guarded = async {
            stages.await.unwrap_or_else(|panic| {
                let detail = panic_message(panic.as_ref());
                error!("Lookup for '{player_name}' panicked: {detail}");
                Err(LookupFailure::internal(detail))
            })
        };

        match self.deadline {
            Some(limit) => tokio::time::timeout(limit, guarded)
                .await
                .unwrap_or_else(|_| {
                    warn!("Lookup for '{player_name}' exceeded {limit:?}");
                    Err(LookupFailure::Transport)
                }),
            None => guarded.await,
        }
    }

    async fn run_stages(
        &self,
        player_name: &str,
        platform_base: &str,
    ) -> Result<AggregateResult, LookupFailure> {
        let identity = self.resolve_identity(platform_base, player_name).await?;
        let rank = self.resolve_rank(platform_base, &identity).await;
        let match_ids = self.resolve_match_ids(&identity).await;
        let recent_matches = self.resolve_match_details(&identity, &match_ids).await;

        let result = AggregateResult::build(identity, rank, recent_matches, match_ids.len());
        info!(
            "Lookup for '{player_name}' done: {} with {}/{} recent matches",
            result.rank.label(),
            result.recent_matches.len(),
            result.requested_matches
        );
        Ok(result)
    }

    async fn resolve_identity(
        &self,
        platform_base: &str,
        player_name: &str,
    ) -> Result<PlayerIdentity, LookupFailure> {
        let url = summoner_by_name_url(platform_base, player_name)?;
        match self.executor.execute(&url).await {
            RequestOutcome::Success(payload) => {
                let summoner: SummonerDto = serde_json::from_value(payload).map_err(|e| {
                    error!("Unexpected summoner payload for '{player_name}': {e}");
                    LookupFailure::internal(format!("unexpected summoner data: {e}"))
                })?;
                Ok(summoner.into())
            }
            outcome => {
                let failure = LookupFailure::from_status(outcome.status_code());
                info!(
                    "Summoner lookup for '{player_name}' failed with status {}: {failure}",
                    outcome.status_code()
                );
                Err(failure)
            }
        }
    }

    async fn resolve_rank(&self, platform_base: &str, identity: &PlayerIdentity) -> RankStanding {
        let entries = match league_entries_url(platform_base, &identity.internal_id) {
            Ok(url) => self.fetch_soft::<Vec<LeagueEntryDto>>(&url, "league entries").await,
            Err(e) => {
                warn!("Skipping rank lookup: {e}");
                None
            }
        };

        entries
            .map(|entries| RankStanding::from_entries(&entries))
            .unwrap_or_else(RankStanding::unranked)
    }

    async fn resolve_match_ids(&self, identity: &PlayerIdentity) -> Vec<String> {
        let ids = match match_ids_url(&self.match_host, &identity.global_id) {
            Ok(url) => self.fetch_soft::<Vec<String>>(&url, "match ids").await,
            Err(e) => {
                warn!("Skipping match history: {e}");
                None
            }
        };

        let ids = ids.unwrap_or_default();
        debug!("Match list returned {} id(s)", ids.len());
        ids
    }

    /// Fetches up to five matches concurrently, keeping the order of `match_ids`.
    async fn resolve_match_details(
        &self,
        identity: &PlayerIdentity,
        match_ids: &[String],
    ) -> Vec<MatchSummary> {
        let fetches = match_ids
            .iter()
            .take(RECENT_MATCH_COUNT)
            .map(|match_id| self.fetch_match_summary(match_id, &identity.global_id));

        join_all(fetches).await.into_iter().flatten().collect()
    }

    async fn fetch_match_summary(&self, match_id: &str, puuid: &str) -> Option<MatchSummary> {
        let url = match match_detail_url(&self.match_host, match_id) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping match {match_id}: {e}");
                return None;
            }
        };

        let detail = self.fetch_soft::<MatchDto>(&url, "match detail").await?;
        let summary = detail.summary_for(puuid);
        if summary.is_none() {
            debug!("Player not among participants of {match_id}, skipping");
        }
        summary
    }

    /// GET + typed decode where failure only means "use the default".
    async fn fetch_soft<D: DeserializeOwned>(&self, url: &str, what: &str) -> Option<D> {
        let payload: Value = match self.executor.execute(url).await {
            RequestOutcome::Success(payload) => payload,
            outcome => {
                warn!(
                    "No {what} (status {}), continuing with defaults",
                    outcome.status_code()
                );
                return None;
            }
        };

        match serde_json::from_value(payload) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Unexpected {what} payload from {url}: {e}");
                None
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected failure during lookup".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats_fetcher::api::RetryPolicy;
    use crate::stats_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{any, header, method, path, query_param},
    };

    fn test_config(platform: &MockServer, matches: &MockServer) -> Config {
        let mut regions = BTreeMap::new();
        regions.insert("br".to_string(), platform.uri());
        Config {
            api_key: "RGAPI-test".to_string(),
            regions,
            default_region: "br".to_string(),
            match_host: matches.uri(),
            ..Config::default()
        }
    }

    fn orchestrator(config: &Config) -> LookupOrchestrator {
        let executor = RequestExecutor::new(
            ReqwestTransport::new(create_test_http_client()),
            &config.api_key,
            RetryPolicy::immediate(3),
        )
        .unwrap();
        LookupOrchestrator::new(executor, config)
    }

    fn summoner_json() -> Value {
        json!({"id": "s1", "puuid": "p1", "summonerLevel": 42, "profileIconId": 7})
    }

    async fn mount_summoner(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/lol/summoner/v4/summoners/by-name/Faker"))
            .and(header("X-Riot-Token", "RGAPI-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summoner_json()))
            .mount(server)
            .await;
    }

    fn participant(puuid: &str, kills: u32, deaths: u32, assists: u32, win: bool) -> Value {
        json!({"puuid": puuid, "kills": kills, "deaths": deaths, "assists": assists, "win": win})
    }

    async fn mount_match(server: &MockServer, match_id: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{match_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_unsupported_region_makes_no_calls() {
        let platform = MockServer::start().await;
        let matches = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&platform)
            .await;

        let config = test_config(&platform, &matches);
        let result = orchestrator(&config).run("Faker", "xx").await;

        assert_eq!(result, Err(LookupFailure::internal(INVALID_REGION)));
        assert!(matches.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_summoner_is_internal() {
        let platform = MockServer::start().await;
        let matches = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol/summoner/v4/summoners/by-name/Faker"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "s1"})))
            .mount(&platform)
            .await;

        let config = test_config(&platform, &matches);
        let result = orchestrator(&config).run("Faker", "br").await;

        match result {
            Err(LookupFailure::Internal(detail)) => assert!(detail.contains("puuid"), "{detail}"),
            other => panic!("expected Internal, got {other:?}"),
        }
        assert!(matches.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_match_failures_are_skipped_in_order() {
        let platform = MockServer::start().await;
        let matches = MockServer::start().await;
        mount_summoner(&platform).await;
        Mock::given(method("GET"))
            .and(path("/lol/league/v4/entries/by-summoner/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&platform)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .and(query_param("count", "5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!(["M1", "M2", "M3", "M4"])),
            )
            .mount(&matches)
            .await;

        mount_match(
            &matches,
            "M1",
            json!({"info": {"participants": [participant("p1", 1, 0, 0, true)]}}),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/M2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&matches)
            .await;
        mount_match(
            &matches,
            "M3",
            json!({"info": {"participants": [participant("someone-else", 9, 9, 9, true)]}}),
        )
        .await;
        mount_match(
            &matches,
            "M4",
            json!({"info": {"participants": [participant("p1", 3, 2, 1, false)]}}),
        )
        .await;

        let config = test_config(&platform, &matches);
        let result = orchestrator(&config).run("Faker", "br").await.unwrap();

        assert!(result.rank.is_unranked());
        assert_eq!(result.requested_matches, 4);
        assert_eq!(
            result.recent_matches,
            vec![
                MatchSummary { kills: 1, deaths: 0, assists: 0, won: true },
                MatchSummary { kills: 3, deaths: 2, assists: 1, won: false },
            ]
        );
        assert_eq!(result.recent_winrate, 25.0);
        assert_eq!(result.kd_ratio, 2.0);
    }

    #[tokio::test]
    async fn test_only_first_five_matches_are_fetched() {
        let platform = MockServer::start().await;
        let matches = MockServer::start().await;
        mount_summoner(&platform).await;
        Mock::given(method("GET"))
            .and(path("/lol/league/v4/entries/by-summoner/s1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&platform)
            .await;

        let ids: Vec<String> = (1..=7).map(|i| format!("M{i}")).collect();
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(ids)))
            .mount(&matches)
            .await;
        for id in &ids[..5] {
            mount_match(
                &matches,
                id,
                json!({"info": {"participants": [participant("p1", 2, 1, 0, true)]}}),
            )
            .await;
        }
        for id in &ids[5..] {
            Mock::given(method("GET"))
                .and(path(format!("/lol/match/v5/matches/{id}")))
                .respond_with(ResponseTemplate::new(200))
                .expect(0)
                .mount(&matches)
                .await;
        }

        let config = test_config(&platform, &matches);
        let result = orchestrator(&config).run("Faker", "br").await.unwrap();

        assert_eq!(result.recent_matches.len(), 5);
        assert_eq!(result.requested_matches, 7);
        // 5 wins over 7 returned ids
        assert_eq!(result.recent_winrate, 71.4);
    }

    #[tokio::test]
    async fn test_malformed_match_list_means_no_recent_matches() {
        let platform = MockServer::start().await;
        let matches = MockServer::start().await;
        mount_summoner(&platform).await;
        Mock::given(method("GET"))
            .and(path("/lol/league/v4/entries/by-summoner/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
            .mount(&platform)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ids": ["M1"]})))
            .mount(&matches)
            .await;

        let config = test_config(&platform, &matches);
        let result = orchestrator(&config).run("Faker", "br").await.unwrap();

        assert!(result.rank.is_unranked());
        assert!(result.recent_matches.is_empty());
        assert_eq!(result.recent_winrate, 0.0);
        assert_eq!(result.kd_ratio, 0.0);
    }

    #[tokio::test]
    async fn test_deadline_exceeded_is_transport() {
        let platform = MockServer::start().await;
        let matches = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol/summoner/v4/summoners/by-name/Faker"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(summoner_json())
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&platform)
            .await;

        let mut config = test_config(&platform, &matches);
        config.lookup_deadline_seconds = Some(1);
        let result = orchestrator(&config).run("Faker", "br").await;

        assert_eq!(result, Err(LookupFailure::Transport));
    }

    #[test]
    fn test_panic_message_extraction() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(boxed.as_ref()), "unexpected failure during lookup");
    }
}
