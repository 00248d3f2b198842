use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use co2_core::AnalyzerConfig;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod input;
mod output;

#[derive(Parser)]
#[command(
    name = "co2",
    version,
    about = "Track a personal carbon footprint from transport, energy and food"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Decimals shown for kg values
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Default report path
    #[arg(long, global = true)]
    report_path: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = AnalyzerConfig::load().context("Invalid configuration")?;
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if let Some(path) = &cli.report_path {
        config.report_path = path.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(cli.verbose);
    let config = load_config(&cli)?;

    match &cli.command {
        commands::Commands::Calc(args) => {
            let calc_matches = matches
                .subcommand_matches("calc")
                .context("Missing calc arguments")?;
            commands::calc::run(args, calc_matches, &config, cli.format)
        }
        commands::Commands::Session(args) => commands::session::run(args, &config, cli.format),
        commands::Commands::Summary(args) => commands::summary::run(args, &config, cli.format),
        commands::Commands::Chart(args) => commands::chart::run(args, &config, cli.format),
        commands::Commands::Factors => commands::factors::run(cli.format),
    }
}
