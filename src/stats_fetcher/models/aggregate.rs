use super::league::RankStanding;
use super::matches::MatchSummary;
use super::summoner::PlayerIdentity;
use crate::constants::RECENT_MATCH_COUNT;

/// Rounds half away from zero to the given number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part / whole` as a percentage with one decimal; 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to(part as f64 / whole as f64 * 100.0, 1)
}

/// Kills per death with two decimals. Without deaths the ratio is the raw
/// kill count.
pub fn kd_ratio(kills: u32, deaths: u32) -> f64 {
    if deaths == 0 {
        return f64::from(kills);
    }
    round_to(f64::from(kills) / f64::from(deaths), 2)
}

/// Everything the reply needs about one player.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub identity: PlayerIdentity,
    pub rank: RankStanding,
    /// Season winrate from the ranked-solo standing.
    pub winrate: f64,
    /// Most recent first, at most five, failed matches left out.
    pub recent_matches: Vec<MatchSummary>,
    /// Number of match ids the match-list call returned.
    pub requested_matches: usize,
    pub recent_wins: u32,
    /// Recent wins over `requested_matches`, not over matches fetched.
    pub recent_winrate: f64,
    pub total_kills: u32,
    pub total_deaths: u32,
    pub total_assists: u32,
    pub kd_ratio: f64,
}

impl AggregateResult {
    pub fn build(
        identity: PlayerIdentity,
        rank: RankStanding,
        mut recent_matches: Vec<MatchSummary>,
        requested_matches: usize,
    ) -> Self {
        recent_matches.truncate(RECENT_MATCH_COUNT.min(requested_matches));

        // Counters come from untrusted payloads; saturate instead of overflowing.
        let total = |stat: fn(&MatchSummary) -> u32| {
            recent_matches
                .iter()
                .map(stat)
                .fold(0u32, u32::saturating_add)
        };
        let total_kills = total(|m| m.kills);
        let total_deaths = total(|m| m.deaths);
        let total_assists = total(|m| m.assists);
        let recent_wins = recent_matches.iter().filter(|m| m.won).count() as u32;

        let winrate = percentage(u64::from(rank.wins), rank.games_played());
        let recent_winrate = percentage(
            u64::from(recent_wins),
            u64::try_from(requested_matches).unwrap_or(u64::MAX),
        );

        Self {
            identity,
            rank,
            winrate,
            recent_matches,
            requested_matches,
            recent_wins,
            recent_winrate,
            total_kills,
            total_deaths,
            total_assists,
            kd_ratio: kd_ratio(total_kills, total_deaths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> PlayerIdentity {
        PlayerIdentity {
            internal_id: "s1".to_string(),
            global_id: "p1".to_string(),
            level: 42,
            icon_id: 7,
        }
    }

    fn gold_two() -> RankStanding {
        RankStanding {
            tier: "GOLD".to_string(),
            division: "II".to_string(),
            league_points: 55,
            wins: 10,
            losses: 8,
        }
    }

    fn game(kills: u32, deaths: u32, assists: u32, won: bool) -> MatchSummary {
        MatchSummary {
            kills,
            deaths,
            assists,
            won,
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(percentage(10, 18), 55.6);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(5, 5), 100.0);
        assert_eq!(kd_ratio(7, 3), 2.33);
        assert_eq!(kd_ratio(20, 10), 2.0);
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(kd_ratio(0, 0), 0.0);
        assert_eq!(kd_ratio(13, 0), 13.0);
    }

    #[test]
    fn test_build_sums_recent_matches() {
        let matches = vec![game(10, 2, 5, true), game(4, 6, 3, false), game(6, 2, 7, true)];
        let result = AggregateResult::build(identity(), gold_two(), matches, 3);

        assert_eq!(result.winrate, 55.6);
        assert_eq!(result.recent_wins, 2);
        assert_eq!(result.recent_winrate, 66.7);
        assert_eq!(
            (result.total_kills, result.total_deaths, result.total_assists),
            (20, 10, 15)
        );
        assert_eq!(result.kd_ratio, 2.0);
    }

    #[test]
    fn test_recent_winrate_uses_requested_count() {
        // Two of five ids failed to load; the denominator stays at five.
        let matches = vec![game(1, 1, 1, true), game(1, 1, 1, true), game(1, 1, 1, false)];
        let result = AggregateResult::build(identity(), gold_two(), matches, 5);
        assert_eq!(result.recent_matches.len(), 3);
        assert_eq!(result.recent_winrate, 40.0);
    }

    #[test]
    fn test_unranked_without_matches() {
        let result = AggregateResult::build(identity(), RankStanding::unranked(), vec![], 0);
        assert_eq!(result.winrate, 0.0);
        assert_eq!(result.recent_winrate, 0.0);
        assert_eq!(result.kd_ratio, 0.0);
        assert!(result.recent_matches.is_empty());
    }

    #[test]
    fn test_recent_matches_capped() {
        let matches = vec![game(1, 0, 0, true); 7];
        let result = AggregateResult::build(identity(), gold_two(), matches.clone(), 7);
        assert_eq!(result.recent_matches.len(), 5);
        assert_eq!(result.kd_ratio, 5.0);

        let result = AggregateResult::build(identity(), gold_two(), matches, 2);
        assert_eq!(result.recent_matches.len(), 2);
    }

    #[test]
    fn test_huge_counters_saturate() {
        let rank = RankStanding {
            wins: u32::MAX,
            losses: 1,
            ..gold_two()
        };
        let matches = vec![game(u32::MAX, 1, u32::MAX, true), game(5, u32::MAX, 5, false)];
        let result = AggregateResult::build(identity(), rank, matches, 2);

        assert_eq!(result.winrate, 100.0);
        assert_eq!(result.total_kills, u32::MAX);
        assert_eq!(result.total_deaths, u32::MAX);
        assert_eq!(result.total_assists, u32::MAX);
        assert_eq!(result.kd_ratio, 1.0);
    }

    #[test]
    fn test_winrates_stay_in_range() {
        for wins in 0..=5u32 {
            for requested in wins.max(1)..=5 {
                let matches: Vec<_> = (0..requested).map(|i| game(1, 1, 1, i < wins)).collect();
                let result =
                    AggregateResult::build(identity(), gold_two(), matches, requested as usize);
                assert!((0.0..=100.0).contains(&result.recent_winrate));
            }
        }
    }
}
