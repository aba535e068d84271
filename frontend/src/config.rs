//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;

use crate::screen::OutputFormat;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Terminal front-end for the items service.
#[derive(Parser, Debug, Clone)]
#[command(name = "items-frontend")]
#[command(about = "Browse, add and delete items on an items backend")]
#[command(version)]
pub struct Config {
    /// Base URL of the items API, including its `/api` prefix.
    #[arg(long, env = "ITEMS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds between automatic refreshes of the item list.
    #[arg(
        long,
        env = "ITEMS_REFRESH_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub refresh_secs: u64,

    /// Output format of the rendered regions.
    #[arg(long, env = "ITEMS_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "ITEMS_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
