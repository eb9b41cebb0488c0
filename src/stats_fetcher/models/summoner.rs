use serde::{Deserialize, Serialize};

/// Summoner payload as returned by the by-name endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SummonerDto {
    pub id: String,
    pub puuid: String,
    #[serde(rename = "summonerLevel")]
    pub summoner_level: u32,
    #[serde(rename = "profileIconId")]
    pub profile_icon_id: u32,
}

/// Who the lookup is about.
///
/// `global_id` (the puuid) is stable across platforms and drives the match
/// lookups; `internal_id` is platform-scoped and only used for the rank lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub internal_id: String,
    pub global_id: String,
    pub level: u32,
    pub icon_id: u32,
}

impl From<SummonerDto> for PlayerIdentity {
    fn from(dto: SummonerDto) -> Self {
        Self {
            internal_id: dto.id,
            global_id: dto.puuid,
            level: dto.summoner_level,
            icon_id: dto.profile_icon_id,
        }
    }
}
