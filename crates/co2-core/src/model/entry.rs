use serde::{Deserialize, Serialize};

use super::category::{Category, Unit};

/// One recorded activity and its computed CO2 contribution.
///
/// Field order is the CSV column order: `category,type,amount,unit,co2_kg`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionEntry {
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub unit: Unit,
    pub co2_kg: f64,
}

impl std::fmt::Display for EmissionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} {} = {:.2} kg CO2",
            self.category, self.amount, self.unit, self.kind, self.co2_kg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmissionEntry {
        EmissionEntry {
            category: Category::Energy,
            kind: "Natural_gas".into(),
            amount: 150.0,
            unit: Unit::KWh,
            co2_kg: 27.75,
        }
    }

    #[test]
    fn test_type_field_renamed() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"type\":\"Natural_gas\""));
        assert!(json.contains("\"unit\":\"kWh\""));
        assert!(!json.contains("kind"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Energy: 150 kWh Natural_gas = 27.75 kg CO2"
        );
    }
}
