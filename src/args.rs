//! Command line interface for the dailylimit binary.

use clap::{Parser, Subcommand, ValueEnum};
use dailylimit::Language;
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// dailylimit: keep track of money spent or calories eaten against a daily limit.
///
/// Records are given inline with --record (CSV text: amount,comment[,DD.MM.YYYY]) or
/// loaded from a CSV file with --file. Nothing is stored between runs.
#[derive(Debug, Parser, Clone)]
#[command(name = "dailylimit", version)]
pub(crate) struct Args {
    #[clap(flatten)]
    pub(crate) common: Common,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Print the limit, today's total, the 7-day total and what is left for today.
    Stats(RecordArgs),
    /// Print today's calorie recommendation.
    Calories(RecordArgs),
    /// Print today's cash balance in the given currency (rub, usd or eur).
    Cash(CashArgs),
    /// Start an interactive session. Records added there are kept in memory only.
    Tui(TuiArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub(crate) struct Common {
    /// Language of the messages: ru or en.
    #[arg(long, global = true, env = "DAILYLIMIT_LANG", default_value_t = Language::Ru)]
    pub(crate) lang: Language,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, env = "DAILYLIMIT_LOG", default_value_t = LevelFilter::WARN)]
    pub(crate) log_level: LevelFilter,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct RecordArgs {
    /// The daily limit, in roubles or kilocalories.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) limit: Decimal,

    /// A record as CSV text, e.g. "250,lunch,14.10.2026". May be repeated.
    #[arg(long = "record", short = 'r')]
    pub(crate) records: Vec<String>,

    /// A CSV file with one amount,comment[,date] row per record.
    #[arg(long, short = 'f')]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct CashArgs {
    #[command(flatten)]
    pub(crate) records: RecordArgs,

    /// Currency code to report the balance in.
    pub(crate) currency: String,
}

#[derive(Debug, Parser, Clone)]
pub(crate) struct TuiArgs {
    #[command(flatten)]
    pub(crate) records: RecordArgs,

    /// What is being tracked.
    #[arg(long, value_enum, default_value_t = Kind::Cash)]
    pub(crate) kind: Kind,

    /// Currency shown in cash mode.
    #[arg(long, default_value = "rub")]
    pub(crate) currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Kind {
    Calories,
    Cash,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calories => write!(f, "calories"),
            Self::Cash => write!(f, "cash"),
        }
    }
}
