use clap::{Arg, ArgAction, Command, builder::ValueParser};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Log levels indexed by verbosity; `-v` steps one entry down the table.
pub const LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

/// Level for a verbosity count; counts past the table stay at TRACE.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    LEVELS
        .get(usize::from(verbosity))
        .map_or(Level::TRACE, |&(_, level)| level)
}

/// Accepts a verbosity count or a level name, case-insensitively.
fn parse_verbosity(value: &str) -> Result<u8, String> {
    if let Ok(count) = value.parse::<u8>() {
        return Ok(count);
    }

    LEVELS
        .iter()
        .position(|(name, _)| name.eq_ignore_ascii_case(value))
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            let names: Vec<&str> = LEVELS.iter().map(|(name, _)| *name).collect();
            format!("invalid log level {value:?} (expected one of: {})", names.join(", "))
        })
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_verbosity)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Repeat to log more; FORMWIZARD_LOG_LEVEL takes error, warn, info, debug or trace")
            .env("FORMWIZARD_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_to_their_table_position() {
        assert_eq!(parse_verbosity("error"), Ok(0));
        assert_eq!(parse_verbosity("DEBUG"), Ok(3));
        assert_eq!(parse_verbosity("2"), Ok(2));
    }

    #[test]
    fn unknown_names_list_the_choices() {
        let err = parse_verbosity("loud").expect_err("invalid level");
        assert!(err.contains("error, warn, info, debug, trace"), "{err}");
    }

    #[test]
    fn counts_past_the_table_stay_at_trace() {
        assert_eq!(level_for(0), Level::ERROR);
        assert_eq!(level_for(3), Level::DEBUG);
        assert_eq!(level_for(9), Level::TRACE);
    }
}
