//! CLI argument definitions for mktdata.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `search` | Find symbols by ticker, ISIN or description |
//! | `history` | Resolve one security and print its candles |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `-v` / `-vv` / `--vv` | off | Log at info / debug level on stderr |
//! | `--schema` | off | Print the JSON schema of the command's arguments |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--catalog` | built-in | JSON catalog file |
//!
//! # Examples
//!
//! ```bash
//! mktdata search --desc apple
//! mktdata search --isin US0378331005 --format json --pretty
//! mktdata history --ticker AAPL --period 5d --date 2023-01-03 --price 125
//! mktdata -vv search --ticker MSFT
//! mktdata history --schema
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use mktdata_core::HistoryPeriod;

/// Validated market data lookups
#[derive(Debug, Parser)]
#[command(
    name = "mktdata",
    author,
    version,
    about = "Validated market data lookups",
    long_about = "Search securities and print price history from a market data catalog.\n\
\n\
Identifiers, dates, countries and currencies are validated before any lookup:\n\
ISINs must carry a correct check digit, dates may be written as YYYY-MM-DD,\n\
YYYYMMDD or YYYY/MM/DD, and countries may be given by code or by name."
)]
pub struct Cli {
    /// Log progress on stderr; repeat (`-vv`) for debug level.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log diagnostics (debug level) on stderr.
    #[arg(long = "vv", global = true, default_value_t = false)]
    pub very_verbose: bool,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Print the JSON schema of the command's arguments and exit.
    #[arg(long, global = true, default_value_t = false)]
    pub schema: bool,

    /// JSON catalog file with `symbols` and `histories`.
    ///
    /// Without this flag a small built-in sample catalog is used.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub const fn default_log_level(&self) -> &'static str {
        if self.very_verbose || self.verbose >= 2 {
            "debug"
        } else if self.verbose == 1 {
            "info"
        } else {
            "warn"
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for terminal display.
    Text,
    /// Single JSON document.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find symbols matching a ticker, ISIN or description.
    Search(SearchArgs),
    /// Resolve one security and print its price history.
    History(HistoryArgs),
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::History(_) => "history",
        }
    }
}

/// Identity fields shared by both commands.
#[derive(Debug, Clone, Args)]
pub struct SecurityArgs {
    /// Ticker symbol.
    #[arg(long)]
    pub ticker: Option<String>,

    /// ISIN, verified against its check digit.
    #[arg(long)]
    pub isin: Option<String>,

    /// Free-text description matched against security names.
    #[arg(long = "desc")]
    pub description: Option<String>,

    /// Listing exchange.
    #[arg(long)]
    pub exchange: Option<String>,

    /// Date the price was observed (YYYY-MM-DD, YYYYMMDD or YYYY/MM/DD).
    #[arg(long)]
    pub date: Option<String>,

    /// Price that must have traded on `--date`.
    #[arg(long)]
    pub price: Option<f64>,
}

/// Arguments for `search`.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub security: SecurityArgs,

    /// ISO 4217 currency code.
    #[arg(long)]
    pub currency: Option<String>,

    /// Country code or name.
    #[arg(long)]
    pub country: Option<String>,

    /// Asset class, e.g. equity or etf.
    #[arg(long)]
    pub asset_class: Option<String>,

    /// Maximum number of results.
    #[arg(long, default_value_t = 100)]
    pub limit: usize,
}

/// Arguments for `history`.
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub security: SecurityArgs,

    /// Look-back period: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max.
    #[arg(long, default_value_t = HistoryPeriod::OneMonth)]
    pub period: HistoryPeriod,
}
