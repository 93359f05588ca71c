//! Reporting Layer
//!
//! This crate drives the portfolio engine through the demo scenario and turns
//! what it observes into reports.
//!
//! # Architecture
//!
//! - **Scenario**: builds the demo portfolios and runs every phase
//! - **Report**: serializable snapshots plus the text renderer
//! - **Config**: `REPORT_*` environment settings
//! - **Error Handling**: one error type wrapping every domain error
//!
//! The engine crates never log; all tracing events come from here.
//!
//! # Example
//!
//! ```rust
//! use interface_report::{config::ReportConfig, render, run};
//!
//! let config = ReportConfig::default();
//! let outcome = run(&config).unwrap();
//! let text = render(&outcome, config.format).unwrap();
//! assert!(text.contains("Initial position"));
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;

use crate::config::{OutputFormat, ReportConfig};
use crate::error::ReportError;
pub use crate::scenario::{DemoScenario, ScenarioOutcome};

/// Runs the demo scenario with the configured horizons
pub fn run(config: &ReportConfig) -> Result<ScenarioOutcome, ReportError> {
    tracing::info!(
        simulated_months = config.simulated_months,
        projection_months = config.projection_months,
        "Running demo scenario"
    );
    DemoScenario::from_config(config).run()
}

/// Renders an outcome in the requested format
pub fn render(outcome: &ScenarioOutcome, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(report::render_text(outcome)),
        OutputFormat::Json => report::render_json(outcome),
    }
}
