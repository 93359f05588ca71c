//! Portfolio Report Binary
//!
//! Runs the demo scenario and prints the report to stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin portfolio-report
//!
//! # Six simulated months, JSON output
//! REPORT_SIMULATED_MONTHS=6 REPORT_FORMAT=json cargo run --bin portfolio-report
//! ```
//!
//! # Environment Variables
//!
//! * `REPORT_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `REPORT_SIMULATED_MONTHS` - Months advanced after the withdrawals (default: 3)
//! * `REPORT_PROJECTION_MONTHS` - Projection horizon (default: 12)
//! * `REPORT_FORMAT` - `text` or `json` (default: text)

use anyhow::Context;
use interface_report::{config::ReportConfig, render, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ReportConfig::from_env().context("invalid REPORT_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(format = ?config.format, "Starting portfolio report");

    let outcome = run(&config)?;
    let rendered = render(&outcome, config.format)?;
    println!("{rendered}");

    tracing::info!(rejected = outcome.rejected.len(), "Report complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
