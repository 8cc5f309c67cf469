//! CLI argument definitions for equisift.

use std::path::PathBuf;

use clap::Parser;
use equisift_core::ScreenThresholds;

/// Screen ticker symbols against fundamental valuation thresholds.
///
/// Tickers come from `--tickers`, from a newline-delimited `--ticker-file`,
/// or from a built-in large-cap basket when neither is given. Matching
/// stocks are printed as a table; non-matches and fetch failures are listed
/// afterwards. With `--email-to`, a detailed report is also sent over SMTP.
#[derive(Debug, Parser)]
#[command(name = "equisift", author, version, about = "Fundamental stock screener")]
pub struct Cli {
    /// Ticker symbols to screen (e.g. AAPL MSFT).
    #[arg(long, num_args = 1..)]
    pub tickers: Option<Vec<String>>,

    /// Path to a newline-delimited list of ticker symbols.
    #[arg(long)]
    pub ticker_file: Option<PathBuf>,

    /// Maximum acceptable trailing P/E ratio.
    #[arg(long)]
    pub max_pe: Option<f64>,

    /// Maximum acceptable price-to-book ratio.
    #[arg(long)]
    pub max_pb: Option<f64>,

    /// Minimum dividend yield percentage (e.g. 2 for 2%).
    #[arg(long)]
    pub min_dividend_yield: Option<f64>,

    /// Minimum market capitalization (in USD).
    #[arg(long)]
    pub min_market_cap: Option<f64>,

    /// Disable the in-memory cache and hit the data source on every request.
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Email address to send the detailed report to.
    #[arg(long)]
    pub email_to: Option<String>,

    /// Sender email address for the report.
    #[arg(long)]
    pub email_from: Option<String>,

    /// Custom email subject. Defaults to an auto-generated value.
    #[arg(long)]
    pub email_subject: Option<String>,

    /// SMTP server hostname.
    #[arg(long)]
    pub smtp_host: Option<String>,

    /// SMTP server port.
    #[arg(long, default_value_t = 587)]
    pub smtp_port: u16,

    /// SMTP username for authentication.
    #[arg(long)]
    pub smtp_username: Option<String>,

    /// SMTP password for authentication.
    #[arg(long)]
    pub smtp_password: Option<String>,

    /// Use SMTP over SSL/TLS (implicit TLS).
    #[arg(long, default_value_t = false)]
    pub smtp_use_ssl: bool,

    /// Upgrade the connection to TLS using STARTTLS.
    #[arg(long, default_value_t = false)]
    pub smtp_use_tls: bool,
}

impl Cli {
    pub fn thresholds(&self) -> ScreenThresholds {
        ScreenThresholds {
            max_pe_ratio: self.max_pe,
            max_pb_ratio: self.max_pb,
            min_dividend_yield: self.min_dividend_yield,
            min_market_cap: self.min_market_cap,
        }
    }
}
