use std::path::PathBuf;

use crate::error::CoreError;

pub const ENV_REPORT_PATH: &str = "CO2_REPORT_PATH";
pub const ENV_CHART_WIDTH: &str = "CO2_CHART_WIDTH";
pub const ENV_PRECISION: &str = "CO2_PRECISION";

/// Presentation settings. Emission factors are fixed and not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Where reports are saved when no path is given.
    pub report_path: PathBuf,
    /// Width in columns of the longest chart bar.
    pub chart_width: usize,
    /// Decimals shown for kg values.
    pub precision: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("co2_report.csv"),
            chart_width: 40,
            precision: 2,
        }
    }
}

impl AnalyzerConfig {
    /// Read config from `CO2_*` environment variables, falling back to
    /// defaults for unset keys.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_REPORT_PATH).filter(|p| !p.trim().is_empty()) {
            config.report_path = PathBuf::from(path);
        }
        if let Some(width) = lookup(ENV_CHART_WIDTH) {
            config.chart_width = parse_usize(ENV_CHART_WIDTH, &width)?;
        }
        if let Some(precision) = lookup(ENV_PRECISION) {
            config.precision = parse_usize(ENV_PRECISION, &precision)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.chart_width < 10 {
            return Err(CoreError::Config(format!(
                "chart width must be at least 10, got {}",
                self.chart_width
            )));
        }
        if self.precision > 6 {
            return Err(CoreError::Config(format!(
                "precision must be at most 6, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize, CoreError> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::Config(format!("{key}: expected a whole number, got '{value}'")))
}
