//! Reply cards built from lookup results
//!
//! A `Reply` is the structured answer to one command: a title, an accent
//! color, an optional thumbnail and a list of labelled fields. Rendering it
//! to a terminal lives in [`render`].

pub mod render;

use crate::constants::reply::{CARD_COLOR, FOOTER};
use crate::error::LookupFailure;
use crate::stats_fetcher::api::INVALID_REGION;
use crate::stats_fetcher::api::urls::profile_icon_url;
use crate::stats_fetcher::models::AggregateResult;

pub use render::render_card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
    /// Whether the field may share a row with its neighbours.
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub title: String,
    pub color: u32,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub fields: Vec<ReplyField>,
    pub footer: Option<String>,
}

/// One decimal for whole numbers ("2.0"), shortest form otherwise ("55.6").
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl Reply {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: CARD_COLOR,
            description: None,
            thumbnail: None,
            fields: Vec::new(),
            footer: None,
        }
    }

    fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Card for a successful lookup.
    pub fn from_result(
        player_name: &str,
        result: &AggregateResult,
        icon_cdn_version: &str,
    ) -> Self {
        let rank = &result.rank;

        let recent = if result.requested_matches == 0 {
            "No recent matches".to_string()
        } else {
            format!(
                "{}/{} ({}%)",
                result.recent_wins,
                result.requested_matches,
                format_decimal(result.recent_winrate)
            )
        };

        let kd = if result.total_deaths == 0 {
            result.total_kills.to_string()
        } else {
            format_decimal(result.kd_ratio)
        };

        let mut reply = Self::new(format!("LoL • {player_name}"))
            .with_field(
                "Rank",
                format!("{} • {} LP", rank.label(), rank.league_points),
                true,
            )
            .with_field(
                "Winrate",
                format!(
                    "{}W/{}L ({}%)",
                    rank.wins,
                    rank.losses,
                    format_decimal(result.winrate)
                ),
                true,
            )
            .with_field("Level", result.identity.level.to_string(), true)
            .with_field("Last matches", recent, true)
            .with_field(
                "K/D/A",
                format!(
                    "{}/{}/{} • {kd}",
                    result.total_kills, result.total_deaths, result.total_assists
                ),
                false,
            );
        reply.thumbnail = Some(profile_icon_url(icon_cdn_version, result.identity.icon_id));
        reply.footer = Some(FOOTER.to_string());
        reply
    }

    /// Card for a failed lookup. An unsupported region gets the list of
    /// valid codes instead of the generic internal-error text.
    pub fn from_failure(failure: &LookupFailure, supported_regions: &[&str]) -> Self {
        if matches!(failure, LookupFailure::Internal(detail) if detail == INVALID_REGION) {
            return Self::invalid_region(supported_regions);
        }
        let mut reply = Self::new("Lookup failed");
        reply.description = Some(failure.user_message());
        reply
    }

    pub fn invalid_region(supported_regions: &[&str]) -> Self {
        let mut reply = Self::new("Invalid region");
        reply.description = Some(format!(
            "Invalid region (use: {}).",
            supported_regions.join(", ")
        ));
        reply
    }

    /// How to call the lookup command.
    pub fn usage() -> Self {
        Self::new("Command").with_field(
            "lol_stats <player> [--region <code>]",
            "Example: `lol_stats Faker --region kr`",
            false,
        )
    }

    pub fn field(&self, name: &str) -> Option<&ReplyField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Lines of the card without any styling.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if let Some(description) = &self.description {
            lines.push(description.clone());
        }
        if let Some(thumbnail) = &self.thumbnail {
            lines.push(format!("Icon: {thumbnail}"));
        }
        lines.extend(self.fields.iter().map(|f| format!("{}: {}", f.name, f.value)));
        if let Some(footer) = &self.footer {
            lines.push(footer.clone());
        }
        lines
    }

    pub fn to_plain_text(&self) -> String {
        self.lines().join("\n")
    }
}
