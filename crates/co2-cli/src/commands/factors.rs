use anyhow::Result;
use co2_core::EmissionFactors;

use crate::output::format::format_factors;
use crate::output::OutputFormat;

pub fn run(format: OutputFormat) -> Result<()> {
    print!("{}", format_factors(&EmissionFactors::standard(), format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
