use clap::{builder::ValueParser, Arg, ArgMatches, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Log levels by verbosity; each `-v` moves one step down the list.
const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// Accepts a level name (`LEAFDOC_LOG_LEVEL=debug`) or its index (`3`).
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|value: &str| -> Result<u8, String> {
        let index = match value.parse::<usize>() {
            Ok(index) => Some(index).filter(|index| *index < LEVELS.len()),
            Err(_) => LEVELS
                .iter()
                .position(|level| level.as_str().eq_ignore_ascii_case(value)),
        };

        index
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level: {value}"))
    })
}

/// Level selected on the command line; errors only when nothing is given.
#[must_use]
pub fn level(matches: &ArgMatches) -> Level {
    let verbosity = matches.get_one::<u8>(ARG_VERBOSITY).copied().unwrap_or(0);
    LEVELS
        .get(usize::from(verbosity))
        .copied()
        .unwrap_or(Level::TRACE)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log level: error, warn, info, debug, trace (default: error)")
            .env("LEAFDOC_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
