use co2_core::{Category, EmissionEntry, EmissionFactors, FactorKey, Summary};

use super::OutputFormat;

const RULE_WIDTH: usize = 60;

/// One-line confirmation printed after an entry is added.
pub fn format_added(entry: &EmissionEntry, precision: usize) -> String {
    let name = entry.kind.to_lowercase();
    let what = match entry.category {
        Category::Transportation => format!("{} {} by {name}", entry.amount, entry.unit),
        Category::Energy | Category::Food => {
            format!("{} {} of {name}", entry.amount, entry.unit)
        }
    };
    format!("\u{2713} Added: {what} = {:.*} kg CO2", precision, entry.co2_kg)
}

pub fn format_total(total_kg: f64, precision: usize) -> String {
    format!("Total emissions: {:.*} kg", precision, total_kg)
}

pub fn format_entry_list(entries: &[EmissionEntry], fmt: OutputFormat, precision: usize) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(entries).unwrap_or_default(),
        OutputFormat::Text => format_entry_list_text(entries, precision),
        OutputFormat::Markdown => format_entry_list_markdown(entries, precision),
    }
}

fn format_entry_list_text(entries: &[EmissionEntry], precision: usize) -> String {
    if entries.is_empty() {
        return "No emissions recorded yet!\n".to_string();
    }

    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<15} {:<12} {:>10} {:<6} {:>10.*} kg CO2\n",
            i + 1,
            e.category.as_str(),
            e.kind,
            e.amount,
            e.unit.as_str(),
            precision,
            e.co2_kg
        ));
    }
    out
}

fn format_entry_list_markdown(entries: &[EmissionEntry], precision: usize) -> String {
    let mut out = String::from("| Category | Type | Amount | Unit | CO2 (kg) |\n");
    out.push_str("|---|---|---:|---|---:|\n");
    for e in entries {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {:.*} |\n",
            e.category, e.kind, e.amount, e.unit, precision, e.co2_kg
        ));
    }
    out
}

pub fn format_summary(summary: &Summary, fmt: OutputFormat, precision: usize) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(summary).unwrap_or_default(),
        OutputFormat::Text => format_summary_text(summary, precision),
        OutputFormat::Markdown => format_summary_markdown(summary, precision),
    }
}

fn format_summary_text(summary: &Summary, precision: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{rule}\n"));
    out.push_str("CO2 EMISSION SUMMARY\n");
    out.push_str(&format!("{rule}\n"));

    out.push_str("\nEmissions by Category:\n");
    for c in &summary.categories {
        out.push_str(&format!(
            "  {}: {:.*} kg CO2\n",
            c.category, precision, c.co2_kg
        ));
    }

    out.push_str(&format!(
        "\n{:<30} {:.*} kg\n",
        "Total CO2 Emissions:", precision, summary.total_kg
    ));
    out.push_str(&format!(
        "{:<30} {:.*} tonnes\n",
        "Equivalent to:",
        precision + 1,
        summary.total_tonnes
    ));
    out.push_str(&format!("{rule}\n"));
    out
}

fn format_summary_markdown(summary: &Summary, precision: usize) -> String {
    let mut out = String::from("## CO2 Emission Summary\n\n");
    out.push_str("| Category | CO2 (kg) |\n|---|---:|\n");
    for c in &summary.categories {
        out.push_str(&format!("| {} | {:.*} |\n", c.category, precision, c.co2_kg));
    }
    out.push_str(&format!(
        "\n**Total:** {:.*} kg ({:.*} tonnes)\n",
        precision,
        summary.total_kg,
        precision + 1,
        summary.total_tonnes
    ));
    out
}

fn factor_unit(key: FactorKey) -> &'static str {
    match key {
        FactorKey::CarKm | FactorKey::BusKm | FactorKey::TrainKm | FactorKey::PlaneKm => "km",
        FactorKey::ElectricityKwh | FactorKey::NaturalGasKwh => "kWh",
        FactorKey::MeatKg => "kg",
        FactorKey::VegetarianMeal => "meal",
    }
}

pub fn format_factors(factors: &EmissionFactors, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = factors
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), serde_json::json!(v)))
                .collect();
            serde_json::to_string_pretty(&map).unwrap_or_default()
        }
        OutputFormat::Text => {
            let mut out = String::from("Emission factors (kg CO2 per unit):\n");
            for (key, value) in factors.iter() {
                out.push_str(&format!(
                    "  {:<16} {:>7} per {}\n",
                    key.as_str(),
                    value,
                    factor_unit(key)
                ));
            }
            out
        }
        OutputFormat::Markdown => {
            let mut out = String::from("| Factor | kg CO2 | Per |\n|---|---:|---|\n");
            for (key, value) in factors.iter() {
                out.push_str(&format!("| {key} | {value} | {} |\n", factor_unit(key)));
            }
            out
        }
    }
}
