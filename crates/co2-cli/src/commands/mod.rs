pub mod calc;
pub mod chart;
pub mod factors;
pub mod session;
pub mod summary;

use std::path::PathBuf;

use clap::Subcommand;
use co2_core::AnalyzerConfig;

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate emissions for the given activities in one go
    Calc(calc::CalcArgs),
    /// Start an interactive session reading commands from stdin
    Session(session::SessionArgs),
    /// Print the category summary of a saved report
    Summary(summary::SummaryArgs),
    /// Draw the category and type charts of a saved report
    Chart(chart::ChartArgs),
    /// List the emission factors
    Factors,
}

/// Where to save a report when the user gave no explicit path. With
/// `stamped`, a timestamp is appended to the file stem
/// (`co2_report_20240131_120000.csv`).
pub fn default_report_path(config: &AnalyzerConfig, stamped: bool) -> PathBuf {
    if !stamped {
        return config.report_path.clone();
    }
    let stem = config
        .report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("co2_report");
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    config
        .report_path
        .with_file_name(format!("{stem}_{stamp}.csv"))
}
