pub mod aggregate;
pub mod league;
pub mod matches;
pub mod summoner;

pub use aggregate::{AggregateResult, kd_ratio, percentage, round_to};
pub use league::{LeagueEntryDto, RankStanding};
pub use matches::{MatchDto, MatchInfoDto, MatchSummary, ParticipantDto};
pub use summoner::{PlayerIdentity, SummonerDto};
