
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

pub const DEFAULT_LEDGER_PATH: &str = "transactions.txt";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Runtime settings taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ledger_path: PathBuf,
    pub log_level: LevelFilter
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            log_level: DEFAULT_LOG_LEVEL
        }
    }
}

impl Config {
    /// Builds the config from positional arguments, program name excluded:
    /// `[ledger_file:optional] [log_level:optional]`.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let defaults = Self::default();

        let ledger_path = args.next()
            .map(PathBuf::from)
            .unwrap_or(defaults.ledger_path);

        let log_level = args.next()
            .map(|s| parse_log_level(&s))
            .unwrap_or(defaults.log_level);

        Self { ledger_path, log_level }
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => {
            //NOTE: Logging is not set up yet at this point so stderr is used directly
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            DEFAULT_LOG_LEVEL
        }
    }
}
