use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Cyan.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the invocation only touches configuration
pub fn is_config_mode(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// League of Legends player stats
///
/// Looks up a summoner and prints their ranked-solo standing, season winrate,
/// level and K/D/A over the last five matches.
#[derive(Parser, Debug, Default)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Summoner name to look up. Prints usage when omitted.
    pub player: Option<String>,

    /// Region code (br, na, eu, kr, jp by default). Falls back to the
    /// configured default region, "br" unless changed.
    #[arg(short = 'r', long = "region")]
    pub region: Option<String>,

    /// Update the Riot API key in config. Will prompt for the key if not provided.
    #[arg(
        long = "set-api-key",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default
    /// location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
