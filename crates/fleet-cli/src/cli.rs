//! CLI argument definitions for the fleet dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fleet",
    version,
    about = "Fleet maintenance dashboard - derive per-part service status from raw sheets",
    long_about = "Join a vehicle roster with its maintenance history and derive\n\
                  per-part service conditions against the built-in interval rules.\n\
                  Renders the fleet table, per-vehicle detail views and the part\n\
                  catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive the fleet snapshot and render the status table.
    Report(ReportArgs),

    /// Show one vehicle: part conditions and maintenance history.
    Show(ShowArgs),

    /// List the part catalog with keywords and interval rules.
    Parts(PartsArgs),
}

/// Raw inputs and derivation options shared by the data subcommands.
#[derive(Args)]
pub struct InputArgs {
    /// Vehicle roster CSV (license, city, model, year).
    #[arg(value_name = "SCHEDULE_CSV")]
    pub schedule: PathBuf,

    /// Maintenance history CSV.
    #[arg(value_name = "HISTORY_CSV")]
    pub history: PathBuf,

    /// Reference date for age calculations (default: today).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Treat odometer readings in the 100-100000 range as thousands.
    ///
    /// Sheets maintained in "thousands of km" need this; sheets with full
    /// odometer readings must leave it off.
    #[arg(long = "infer-thousands")]
    pub infer_thousands: bool,

    /// Replace the built-in part catalog with a JSON file.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Case-insensitive substring over license, model and city.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only vehicles registered in this city.
    #[arg(long = "city", value_name = "CITY")]
    pub city: Option<String>,

    /// Only vehicles with at least one part in this condition.
    #[arg(long = "condition", value_enum)]
    pub condition: Option<ConditionArg>,

    /// Only vehicles with a recorded service for this catalog part.
    #[arg(long = "part", value_name = "NAME")]
    pub part: Option<String>,

    /// Narrow --part to a specific condition.
    #[arg(long = "part-condition", value_enum, requires = "part")]
    pub part_condition: Option<ConditionArg>,

    /// Emit the filtered snapshot as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Reuse a derived snapshot from this directory when younger than
    /// five minutes.
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Ignore and do not write the snapshot cache.
    #[arg(long = "no-cache", requires = "cache_dir")]
    pub no_cache: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// License plate of the vehicle to show.
    #[arg(value_name = "LICENSE")]
    pub license: String,

    /// Only history rows matching this catalog part's keywords.
    #[arg(long = "part", value_name = "NAME")]
    pub part: Option<String>,

    /// Case-insensitive substring over the history columns.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Emit the vehicle as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct PartsArgs {
    /// Replace the built-in part catalog with a JSON file.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// CLI condition choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ConditionArg {
    Good,
    Warning,
    Critical,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_parses_filters() {
        let cli = Cli::parse_from([
            "fleet",
            "report",
            "schedule.csv",
            "history.csv",
            "--city",
            "Київ",
            "--condition",
            "critical",
            "--as-of",
            "2024-02-10",
            "--infer-thousands",
        ]);
        let Command::Report(args) = cli.command else {
            panic!("expected report subcommand");
        };
        assert_eq!(args.city.as_deref(), Some("Київ"));
        assert!(matches!(args.condition, Some(ConditionArg::Critical)));
        assert_eq!(
            args.input.as_of,
            NaiveDate::from_ymd_opt(2024, 2, 10)
        );
        assert!(args.input.infer_thousands);
        assert!(!args.json);
    }

    #[test]
    fn part_condition_requires_part() {
        let result = Cli::try_parse_from([
            "fleet",
            "report",
            "schedule.csv",
            "history.csv",
            "--part-condition",
            "warning",
        ]);
        assert!(result.is_err());
    }
}
