use serde::{Deserialize, Serialize};

use super::summary::{category_totals, CategoryTotal};
use crate::ledger::EmissionLedger;
use crate::model::EmissionEntry;

/// Total CO2 for one entry type label (`Car`, `Natural_gas`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeTotal {
    #[serde(rename = "type")]
    pub kind: String,
    pub co2_kg: f64,
}

/// Aggregates handed to a chart renderer: a proportional breakdown by
/// category and a magnitude-ordered breakdown by type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    /// First-appearance order.
    pub by_category: Vec<CategoryTotal>,
    /// Ascending by `co2_kg`; ties keep first-appearance order.
    pub by_type: Vec<TypeTotal>,
}

impl ChartData {
    pub fn from_entries(entries: &[EmissionEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let mut by_type: Vec<TypeTotal> = Vec::new();
        for e in entries {
            match by_type.iter_mut().find(|t| t.kind == e.kind) {
                Some(t) => t.co2_kg += e.co2_kg,
                None => by_type.push(TypeTotal {
                    kind: e.kind.clone(),
                    co2_kg: e.co2_kg,
                }),
            }
        }
        by_type.sort_by(|a, b| a.co2_kg.total_cmp(&b.co2_kg));

        Some(Self {
            by_category: category_totals(entries),
            by_type,
        })
    }

    pub fn total_kg(&self) -> f64 {
        self.by_category.iter().map(|c| c.co2_kg).sum()
    }

    /// Share of each category in percent, in `by_category` order.
    pub fn category_shares(&self) -> Vec<f64> {
        let total = self.total_kg();
        self.by_category
            .iter()
            .map(|c| {
                if total > 0.0 {
                    c.co2_kg / total * 100.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}

impl EmissionLedger {
    /// Chart aggregates for the current entries. `None` when there is
    /// nothing to visualize.
    pub fn chart_data(&self) -> Option<ChartData> {
        ChartData::from_entries(self.entries())
    }
}
