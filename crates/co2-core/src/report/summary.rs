use serde::{Deserialize, Serialize};

use crate::ledger::EmissionLedger;
use crate::model::{Category, EmissionEntry};

/// Total CO2 for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub co2_kg: f64,
}

/// Per-category breakdown plus grand total of a ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    /// Categories in order of first appearance in the ledger.
    pub categories: Vec<CategoryTotal>,
    pub total_kg: f64,
    pub total_tonnes: f64,
}

impl Summary {
    /// `None` when there are no entries to summarize.
    pub fn from_entries(entries: &[EmissionEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let categories = category_totals(entries);
        let total_kg: f64 = entries.iter().map(|e| e.co2_kg).sum();
        Some(Self {
            categories,
            total_kg,
            total_tonnes: total_kg / 1000.0,
        })
    }

    pub fn category(&self, category: Category) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.co2_kg)
    }
}

/// Group by category, keeping first-appearance order.
pub(crate) fn category_totals(entries: &[EmissionEntry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for e in entries {
        match totals.iter_mut().find(|t| t.category == e.category) {
            Some(t) => t.co2_kg += e.co2_kg,
            None => totals.push(CategoryTotal {
                category: e.category,
                co2_kg: e.co2_kg,
            }),
        }
    }
    totals
}

impl EmissionLedger {
    /// Per-category subtotals, grand total and tonnes. `None` for an empty
    /// ledger.
    pub fn get_summary(&self) -> Option<Summary> {
        Summary::from_entries(self.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EnergySource, FoodKind, TransportMode};

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_empty_ledger_has_no_summary() {
        assert!(EmissionLedger::new().get_summary().is_none());
    }

    #[test]
    fn test_scenario_summary() {
        let mut ledger = EmissionLedger::new();
        ledger.add_transportation(TransportMode::Car, 50.0).unwrap();
        ledger.add_transportation(TransportMode::Bus, 20.0).unwrap();
        ledger.add_energy(EnergySource::Electricity, 300.0).unwrap();
        ledger.add_food(FoodKind::Meat, 2.0).unwrap();
        ledger.add_food(FoodKind::Vegetarian, 10.0).unwrap();

        let summary = ledger.get_summary().unwrap();
        assert_eq!(summary.categories.len(), 3);
        assert_close(summary.category(Category::Transportation).unwrap(), 11.38);
        assert_close(summary.category(Category::Energy).unwrap(), 142.5);
        assert_close(summary.category(Category::Food).unwrap(), 69.0);
        assert_close(summary.total_kg, 222.88);
        assert_close(summary.total_tonnes, 0.22288);
    }

    #[test]
    fn test_first_appearance_order() {
        let mut ledger = EmissionLedger::new();
        ledger.add_food(FoodKind::Vegetarian, 1.0).unwrap();
        ledger.add_energy(EnergySource::NaturalGas, 10.0).unwrap();
        ledger.add_food(FoodKind::Meat, 1.0).unwrap();

        let order: Vec<Category> = ledger
            .get_summary()
            .unwrap()
            .categories
            .iter()
            .map(|c| c.category)
            .collect();
        assert_eq!(order, vec![Category::Food, Category::Energy]);
        assert!(ledger.get_summary().unwrap().category(Category::Transportation).is_none());
    }

    #[test]
    fn test_summary_after_clear() {
        let mut ledger = EmissionLedger::new();
        ledger.add_transportation(TransportMode::Plane, 500.0).unwrap();
        assert!(ledger.get_summary().is_some());
        ledger.clear();
        assert!(ledger.get_summary().is_none());
    }
}
