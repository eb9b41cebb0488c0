use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchDto {
    pub info: MatchInfoDto,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchInfoDto {
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ParticipantDto {
    pub puuid: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
}

/// The player's line from one recent match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSummary {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub won: bool,
}

impl MatchDto {
    /// The summary of the participant with the given puuid, if present.
    pub fn summary_for(&self, puuid: &str) -> Option<MatchSummary> {
        self.info
            .participants
            .iter()
            .find(|p| p.puuid == puuid)
            .map(|p| MatchSummary {
                kills: p.kills,
                deaths: p.deaths,
                assists: p.assists,
                won: p.win,
            })
    }
}
