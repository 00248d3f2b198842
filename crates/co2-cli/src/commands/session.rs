use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use co2_core::{AnalyzerConfig, EmissionLedger};
use tracing::debug;

use crate::input::parse_amount;
use crate::output::chart::render_chart;
use crate::output::format::{format_added, format_entry_list, format_summary, format_total};
use crate::output::OutputFormat;

const HELP: &str = "\
Commands:
  transport <car|bus|train|plane> <km>
  energy <electricity|natural_gas> <kwh>
  food <meat|vegetarian> <kg|meals>
  list                 show all entries
  total                show the running total
  summary              category summary
  chart                category and type charts
  save [path]          save the CSV report
  clear                discard all entries (asks for confirmation)
  help                 show this help
  quit                 leave the session";

#[derive(Args)]
pub struct SessionArgs {
    /// Load entries from an existing report before starting
    #[arg(long, value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Append a timestamp to the default report file name on `save`
    #[arg(long)]
    pub stamped: bool,
}

pub fn run(args: &SessionArgs, config: &AnalyzerConfig, format: OutputFormat) -> Result<()> {
    let ledger = match &args.load {
        Some(path) => EmissionLedger::load_report(path)
            .with_context(|| format!("Failed to read report {}", path.display()))?,
        None => EmissionLedger::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session {
        ledger,
        config,
        format,
        stamped: args.stamped,
        input: stdin.lock(),
        out: stdout.lock(),
    };
    session.run()
}

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front-end around one ledger. Every add prints the entry and
/// the running total; input errors are reported and the session goes on.
struct Session<'a, R, W> {
    ledger: EmissionLedger,
    config: &'a AnalyzerConfig,
    format: OutputFormat,
    stamped: bool,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        writeln!(self.out, "CO2 Emission Analyzer. Type 'help' for commands.")?;
        if !self.ledger.is_empty() {
            writeln!(self.out, "Loaded {} entries.", self.ledger.len())?;
            self.print_total()?;
        }

        while let Some(line) = self.read_line()? {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            debug!(command = words[0], "session command");
            match self.dispatch(&words) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => writeln!(self.out, "Error: {e:#}")?,
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn dispatch(&mut self, words: &[&str]) -> Result<Flow> {
        let precision = self.config.precision;
        match words {
            ["transport", mode, km] => {
                let amount = parse_amount(km)?;
                let entry = self.ledger.add_transportation_str(mode, amount)?;
                let line = format_added(entry, precision);
                self.print_added(&line)?;
            }
            ["energy", kind, kwh] => {
                let amount = parse_amount(kwh)?;
                let entry = self.ledger.add_energy_str(kind, amount)?;
                let line = format_added(entry, precision);
                self.print_added(&line)?;
            }
            ["food", kind, qty] => {
                let amount = parse_amount(qty)?;
                let entry = self.ledger.add_food_str(kind, amount)?;
                let line = format_added(entry, precision);
                self.print_added(&line)?;
            }
            ["transport" | "energy" | "food", ..] => {
                anyhow::bail!("usage: {} <type> <amount>", words[0]);
            }
            ["list"] => {
                let list = format_entry_list(self.ledger.entries(), self.format, precision);
                writeln!(self.out, "{}", list.trim_end())?;
                self.print_total()?;
            }
            ["total"] => self.print_total()?,
            ["summary"] => match self.ledger.get_summary() {
                Some(summary) => {
                    write!(self.out, "{}", format_summary(&summary, self.format, precision))?;
                    writeln!(self.out)?;
                }
                None => writeln!(self.out, "No emissions recorded yet!")?,
            },
            ["chart"] => match self.ledger.chart_data() {
                Some(data) => {
                    let width = self.config.chart_width;
                    let chart = render_chart(&data, width, self.format, precision);
                    writeln!(self.out, "{}", chart.trim_end())?;
                }
                None => writeln!(self.out, "No emissions to visualize!")?,
            },
            ["save"] => {
                let path = super::default_report_path(self.config, self.stamped);
                self.save(path)?;
            }
            ["save", path] => self.save(PathBuf::from(*path))?,
            ["clear"] => self.clear()?,
            ["help"] => writeln!(self.out, "{HELP}")?,
            ["quit" | "exit"] => return Ok(Flow::Quit),
            _ => anyhow::bail!("unknown command '{}' (type 'help')", words.join(" ")),
        }
        Ok(Flow::Continue)
    }

    fn print_added(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.print_total()
    }

    fn print_total(&mut self) -> Result<()> {
        let total = format_total(self.ledger.get_total_emissions(), self.config.precision);
        writeln!(self.out, "{total}")?;
        Ok(())
    }

    fn save(&mut self, path: PathBuf) -> Result<()> {
        let rows = self
            .ledger
            .save_report(&path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
        if rows == 0 {
            writeln!(self.out, "No emissions to save!")?;
        } else {
            writeln!(self.out, "\u{2713} Report saved to {}", path.display())?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.ledger.is_empty() {
            writeln!(self.out, "Nothing to clear.")?;
            return Ok(());
        }
        write!(self.out, "Clear all {} entries? [y/N] ", self.ledger.len())?;
        self.out.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        if matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            self.ledger.clear();
            writeln!(self.out, "All entries cleared.")?;
            self.print_total()?;
        } else {
            writeln!(self.out, "Kept all entries.")?;
        }
        Ok(())
    }
}
