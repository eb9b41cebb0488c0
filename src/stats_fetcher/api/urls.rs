//! Endpoint URL builders
//!
//! Path segments are percent-encoded, so player names with spaces or
//! non-ASCII characters are safe to pass straight through.

use reqwest::Url;

use crate::constants::RECENT_MATCH_COUNT;
use crate::error::LookupFailure;

fn build_url(host: &str, segments: &[&str]) -> Result<Url, LookupFailure> {
    let mut url = Url::parse(host)
        .map_err(|e| LookupFailure::internal(format!("invalid API host '{host}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| LookupFailure::internal(format!("API host '{host}' cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `{platform}/lol/summoner/v4/summoners/by-name/{name}`
pub fn summoner_by_name_url(
    platform_base: &str,
    player_name: &str,
) -> Result<String, LookupFailure> {
    build_url(
        platform_base,
        &["lol", "summoner", "v4", "summoners", "by-name", player_name],
    )
    .map(String::from)
}

/// `{platform}/lol/league/v4/entries/by-summoner/{summonerId}`
pub fn league_entries_url(platform_base: &str, summoner_id: &str) -> Result<String, LookupFailure> {
    build_url(
        platform_base,
        &["lol", "league", "v4", "entries", "by-summoner", summoner_id],
    )
    .map(String::from)
}

/// `{continental}/lol/match/v5/matches/by-puuid/{puuid}/ids?count=5`
pub fn match_ids_url(match_host: &str, puuid: &str) -> Result<String, LookupFailure> {
    let mut url = build_url(
        match_host,
        &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
    )?;
    url.query_pairs_mut()
        .append_pair("count", &RECENT_MATCH_COUNT.to_string());
    Ok(url.into())
}

/// `{continental}/lol/match/v5/matches/{matchId}`
pub fn match_detail_url(match_host: &str, match_id: &str) -> Result<String, LookupFailure> {
    build_url(match_host, &["lol", "match", "v5", "matches", match_id]).map(String::from)
}

/// Data Dragon URL of a profile icon.
pub fn profile_icon_url(cdn_version: &str, icon_id: u32) -> String {
    format!("https://ddragon.leagueoflegends.com/cdn/{cdn_version}/img/profileicon/{icon_id}.png")
}
