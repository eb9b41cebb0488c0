//! Application-wide constants and configuration defaults
//!
//! This module centralizes the endpoint layout, default region table and
//! retry settings so configuration and the fetcher agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Header carrying the API credential on every request (lowercase, as sent on the wire)
pub const API_KEY_HEADER: &str = "x-riot-token";

/// Region used when the command does not name one
pub const DEFAULT_REGION: &str = "br";

/// Platform hosts for the supported region codes
pub const DEFAULT_REGIONS: [(&str, &str); 5] = [
    ("br", "https://br1.api.riotgames.com"),
    ("na", "https://na1.api.riotgames.com"),
    ("eu", "https://euw1.api.riotgames.com"),
    ("kr", "https://kr.api.riotgames.com"),
    ("jp", "https://jp1.api.riotgames.com"),
];

/// Continental host serving match data. Match endpoints always go here,
/// whatever platform the summoner lives on.
pub const DEFAULT_MATCH_HOST: &str = "https://americas.api.riotgames.com";

/// Number of recent matches requested and inspected
pub const RECENT_MATCH_COUNT: usize = 5;

/// Queue type whose standing is reported
pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Tier shown when the player has no ranked-solo entry
pub const UNRANKED_TIER: &str = "Unranked";

/// Retry configuration
pub mod retry {
    /// Total attempts per request, including the first one
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Fixed pause between attempts (milliseconds)
    pub const DELAY_MS: u64 = 1000;
}

/// Reply card presentation
pub mod reply {
    /// Accent color of the reply card (0xRRGGBB)
    pub const CARD_COLOR: u32 = 0xC19A6B;

    /// Data Dragon release used for profile icon URLs
    pub const DEFAULT_ICON_CDN_VERSION: &str = "15.24.1";

    pub const FOOTER: &str = "Data via Riot API";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the API key override
    pub const API_KEY: &str = "LOL_STATS_API_KEY";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "LOL_STATS_LOG_FILE";

    /// Environment variable for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "LOL_STATS_HTTP_TIMEOUT";

    /// Environment variable for the continental match host override
    pub const MATCH_HOST: &str = "LOL_STATS_MATCH_HOST";
}
