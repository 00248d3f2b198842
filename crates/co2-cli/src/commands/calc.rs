use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgMatches, Args};
use co2_core::{AnalyzerConfig, EmissionLedger};

use crate::input::ActivityArg;
use crate::output::chart::render_chart;
use crate::output::format::{format_added, format_summary, format_total};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CalcArgs {
    /// Trip as MODE:KM (car, bus, train, plane); repeatable
    #[arg(short, long = "transport", value_name = "MODE:KM")]
    pub transport: Vec<ActivityArg>,

    /// Energy use as TYPE:KWH (electricity, natural_gas); repeatable
    #[arg(short, long = "energy", value_name = "TYPE:KWH")]
    pub energy: Vec<ActivityArg>,

    /// Food as KIND:QTY (meat in kg, vegetarian in meals); repeatable
    #[arg(short, long = "food", value_name = "KIND:QTY")]
    pub food: Vec<ActivityArg>,

    /// Print the category summary
    #[arg(long)]
    pub summary: bool,

    /// Draw the category and type charts
    #[arg(long)]
    pub chart: bool,

    /// Save a CSV report (default path when no value is given)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Append a timestamp to the default report file name
    #[arg(long, requires = "save")]
    pub stamped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivityKind {
    Transport,
    Energy,
    Food,
}

impl ActivityKind {
    fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Transport => "transport",
            ActivityKind::Energy => "energy",
            ActivityKind::Food => "food",
        }
    }
}

/// All `-t/-e/-f` values in the order they were given on the command line.
fn activities_in_order<'a>(
    args: &'a CalcArgs,
    matches: &ArgMatches,
) -> Vec<(ActivityKind, &'a ActivityArg)> {
    let mut tagged = Vec::new();
    for (kind, values) in [
        (ActivityKind::Transport, &args.transport),
        (ActivityKind::Energy, &args.energy),
        (ActivityKind::Food, &args.food),
    ] {
        let indices = matches.indices_of(kind.as_str()).into_iter().flatten();
        tagged.extend(indices.zip(values).map(|(index, value)| (index, kind, value)));
    }
    tagged.sort_by_key(|(index, ..)| *index);
    tagged.into_iter().map(|(_, kind, value)| (kind, value)).collect()
}

pub fn run(
    args: &CalcArgs,
    matches: &ArgMatches,
    config: &AnalyzerConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut ledger = EmissionLedger::new();
    let mut added = Vec::new();

    for (kind, a) in activities_in_order(args, matches) {
        let entry = match kind {
            ActivityKind::Transport => ledger.add_transportation_str(&a.name, a.amount),
            ActivityKind::Energy => ledger.add_energy_str(&a.name, a.amount),
            ActivityKind::Food => ledger.add_food_str(&a.name, a.amount),
        }
        .with_context(|| format!("Cannot add {} '{}:{}'", kind.as_str(), a.name, a.amount))?;
        added.push(format_added(entry, config.precision));
    }

    let saved = match &args.save {
        Some(path) => {
            let path = path
                .clone()
                .unwrap_or_else(|| super::default_report_path(config, args.stamped));
            let rows = ledger
                .save_report(&path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            (rows > 0).then_some(path)
        }
        None => None,
    };

    match format {
        OutputFormat::Json => {
            let mut out = serde_json::json!({
                "entries": ledger.entries(),
                "total_kg": ledger.get_total_emissions(),
            });
            if args.summary {
                out["summary"] = serde_json::json!(ledger.get_summary());
            }
            if args.chart {
                out["chart"] = serde_json::json!(ledger.chart_data());
            }
            if let Some(path) = &saved {
                out["saved"] = serde_json::json!(path.display().to_string());
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            if ledger.is_empty() {
                println!("No emissions recorded yet!");
                return Ok(());
            }
            for line in &added {
                println!("{line}");
            }
            println!(
                "{}",
                format_total(ledger.get_total_emissions(), config.precision)
            );
            if args.summary {
                if let Some(summary) = ledger.get_summary() {
                    print!("{}", format_summary(&summary, format, config.precision));
                }
            }
            if args.chart {
                if let Some(data) = ledger.chart_data() {
                    println!();
                    print!(
                        "{}",
                        render_chart(&data, config.chart_width, format, config.precision)
                    );
                }
            }
            if let Some(path) = &saved {
                println!("\u{2713} Report saved to {}", path.display());
            }
        }
    }

    Ok(())
}
