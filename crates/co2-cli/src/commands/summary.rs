use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use co2_core::{AnalyzerConfig, EmissionLedger};

use crate::output::format::{format_entry_list, format_summary};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct SummaryArgs {
    /// Report to read (default: the configured report path)
    pub path: Option<PathBuf>,

    /// Also list every entry
    #[arg(long)]
    pub entries: bool,
}

pub fn run(args: &SummaryArgs, config: &AnalyzerConfig, format: OutputFormat) -> Result<()> {
    let path = args.path.as_ref().unwrap_or(&config.report_path);
    let ledger = EmissionLedger::load_report(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;

    if args.entries {
        println!(
            "{}",
            format_entry_list(ledger.entries(), format, config.precision)
        );
    }

    match ledger.get_summary() {
        Some(summary) => println!("{}", format_summary(&summary, format, config.precision)),
        None => println!("No emissions recorded yet!"),
    }
    Ok(())
}
