//! Utils

use clap::{Args, Parser, ValueEnum};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Arguments for the checkout example
#[derive(Debug, Parser)]
pub struct CheckoutArgs {
    /// Fixture set to use for the cart & promotions
    #[arg(short, long, default_value = "checkout")]
    pub fixture: String,

    /// Directory containing the fixture sets
    #[arg(long, default_value = "./fixtures")]
    pub fixtures_dir: String,

    /// Promo code to use instead of the fixture's own
    #[arg(short, long)]
    pub promo_code: Option<String>,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}
