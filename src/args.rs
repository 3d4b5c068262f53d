use clap::Parser;
use serde::Serialize;
use sieve_lib::config::{defaults, Config};

/// Sieves a formula for a contradiction, with a majority heuristic and unit propagation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse, read from stdin if absent
    pub formula: Option<std::path::PathBuf>,

    /// The DIMACS form CNF file to parse, as an alternative to the positional argument
    #[arg(short, long, conflicts_with = "formula")]
    pub formula_file: Option<std::path::PathBuf>,

    /// Skip the majority heuristic, leaving only exhaustion checks and unit propagation
    #[arg(long, default_value_t = false)]
    pub no_narrowing: bool,

    /// Skip the check for groups with at least 2^n clauses over n atoms
    #[arg(long, default_value_t = false)]
    pub no_exhaustion: bool,

    /// The prefix to an atom when displaying an assignment
    #[arg(short, long, default_value_t = String::from(defaults::ATOM_PREFIX))]
    pub prefix: String,

    /// How to display an assignment
    #[arg(long, default_value_t, value_enum)]
    pub valuation_style: ValuationStyle,

    /// Display the contradiction found on an unsatisfiable formula
    #[arg(short, long, default_value_t = false)]
    pub reason: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// The level of logs to display, when built with logs
    #[arg(long, default_value_t, value_enum)]
    pub log_level: LogLevel,

    /// Print this help as markdown
    #[arg(long, default_value_t = false, hide = true)]
    pub markdown_help: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ValuationStyle {
    #[default]
    /// One line for each atom, with the values the atom may take
    Sets,
    /// A single line of the literals with a fixed value
    Dimacs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Options only of interest to the cli.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "log"), allow(dead_code))]
pub struct CliOptions {
    pub formula_file: Option<std::path::PathBuf>,
    pub prefix: String,
    pub valuation_style: ValuationStyle,
    pub reason: bool,
    pub stats: bool,
    pub log_level: log::LevelFilter,
}

pub fn config_from_args(args: Args) -> (Config, CliOptions) {
    let mut the_config = Config::default();
    the_config.switch.narrowing = !args.no_narrowing;
    the_config.switch.exhaustion = !args.no_exhaustion;

    let cli_options = CliOptions {
        formula_file: args.formula_file.or(args.formula),
        prefix: args.prefix,
        valuation_style: args.valuation_style,
        reason: args.reason,
        stats: args.stats,
        log_level: args.log_level.into(),
    };

    (the_config, cli_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_follow_flags() {
        let args = Args::parse_from(["otter_sieve", "--no-narrowing", "-f", "formula.cnf"]);
        let (config, options) = config_from_args(args);
        assert!(!config.switch.narrowing);
        assert!(config.switch.exhaustion);
        assert_eq!(options.prefix, "x");
        assert_eq!(options.valuation_style, ValuationStyle::Sets);
    }

    #[test]
    fn valuation_style_is_kebab_case() {
        let args = Args::parse_from(["otter_sieve", "--valuation-style", "dimacs"]);
        assert_eq!(args.valuation_style, ValuationStyle::Dimacs);
        assert_eq!(args.log_level, LogLevel::Warn);
        assert!(args.formula_file.is_none());
    }

    #[test]
    fn positional_formula() {
        let args = Args::parse_from(["otter_sieve", "formula.cnf"]);
        let (_, options) = config_from_args(args);
        assert_eq!(options.formula_file, Some(std::path::PathBuf::from("formula.cnf")));
    }
}
