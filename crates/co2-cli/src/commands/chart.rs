use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use co2_core::{AnalyzerConfig, EmissionLedger};

use crate::output::chart::render_chart;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ChartArgs {
    /// Report to read (default: the configured report path)
    pub path: Option<PathBuf>,

    /// Width of the longest bar in columns
    #[arg(long)]
    pub width: Option<usize>,
}

pub fn run(args: &ChartArgs, config: &AnalyzerConfig, format: OutputFormat) -> Result<()> {
    let path = args.path.as_ref().unwrap_or(&config.report_path);
    let ledger = EmissionLedger::load_report(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;

    match ledger.chart_data() {
        Some(data) => {
            let width = args.width.unwrap_or(config.chart_width);
            println!("{}", render_chart(&data, width, format, config.precision));
        }
        None => println!("No emissions to visualize!"),
    }
    Ok(())
}
