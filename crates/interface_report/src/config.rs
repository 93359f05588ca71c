//! Report configuration

use serde::{Deserialize, Serialize};

/// Output format of the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Log level
    pub log_level: String,
    /// Months advanced by the monthly simulation
    pub simulated_months: u32,
    /// Horizon of the projection table
    pub projection_months: u32,
    /// Output format
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            simulated_months: 3,
            projection_months: 12,
            format: OutputFormat::Text,
        }
    }
}

impl ReportConfig {
    /// Loads configuration from `REPORT_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("REPORT"))
    }

    /// Loads configuration from an explicit environment source
    ///
    /// Unset keys keep their defaults.
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
