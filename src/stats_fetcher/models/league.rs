use serde::{Deserialize, Serialize};

use crate::constants::{RANKED_SOLO_QUEUE, UNRANKED_TIER};

/// One queue entry from the league-entries endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct LeagueEntryDto {
    #[serde(rename = "queueType")]
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    #[serde(rename = "leaguePoints")]
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

/// Season standing in the ranked-solo queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankStanding {
    pub tier: String,
    pub division: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl RankStanding {
    /// Standing used when the player has no ranked-solo entry or the rank
    /// lookup failed.
    pub fn unranked() -> Self {
        Self {
            tier: UNRANKED_TIER.to_string(),
            division: String::new(),
            league_points: 0,
            wins: 0,
            losses: 0,
        }
    }

    pub fn is_unranked(&self) -> bool {
        *self == Self::unranked()
    }

    /// "GOLD II", or just the tier when there is no division.
    pub fn label(&self) -> String {
        if self.division.is_empty() {
            self.tier.clone()
        } else {
            format!("{} {}", self.tier, self.division)
        }
    }

    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Picks the first ranked-solo entry, falling back to unranked.
    pub fn from_entries(entries: &[LeagueEntryDto]) -> Self {
        entries
            .iter()
            .find(|entry| entry.queue_type == RANKED_SOLO_QUEUE)
            .map(|entry| Self {
                tier: entry.tier.clone(),
                division: entry.rank.clone(),
                league_points: entry.league_points,
                wins: entry.wins,
                losses: entry.losses,
            })
            .unwrap_or_else(Self::unranked)
    }
}

impl Default for RankStanding {
    fn default() -> Self {
        Self::unranked()
    }
}
