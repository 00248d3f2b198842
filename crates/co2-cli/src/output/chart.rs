use co2_core::ChartData;

use super::OutputFormat;

const BAR: char = '\u{2588}';

/// Two-panel text chart: proportional breakdown by category, then types as
/// horizontal bars in ascending order.
pub fn render_chart(data: &ChartData, width: usize, fmt: OutputFormat, precision: usize) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(data).unwrap_or_default(),
        OutputFormat::Text | OutputFormat::Markdown => render_chart_text(data, width, precision),
    }
}

fn render_chart_text(data: &ChartData, width: usize, precision: usize) -> String {
    let mut out = String::new();

    out.push_str("CO2 Emissions by Category\n");
    let label_width = data
        .by_category
        .iter()
        .map(|c| c.category.as_str().len())
        .max()
        .unwrap_or(0);
    for (c, share) in data.by_category.iter().zip(data.category_shares()) {
        let len = ((share / 100.0) * width as f64).round() as usize;
        out.push_str(&format!(
            "  {:<label_width$}  {:<width$}  {:>5.1}%\n",
            c.category.as_str(),
            bar(len.max(1)),
            share
        ));
    }

    out.push_str("\nCO2 Emissions by Type\n");
    let label_width = data.by_type.iter().map(|t| t.kind.len()).max().unwrap_or(0);
    let max = data
        .by_type
        .iter()
        .map(|t| t.co2_kg)
        .fold(0.0_f64, f64::max);
    for t in &data.by_type {
        out.push_str(&format!(
            "  {:<label_width$}  {} {:.*} kg\n",
            t.kind,
            bar(bar_len(t.co2_kg, max, width)),
            precision,
            t.co2_kg
        ));
    }
    out
}

fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    (((value / max) * width as f64).round() as usize).max(1)
}

fn bar(len: usize) -> String {
    std::iter::repeat(BAR).take(len).collect()
}
