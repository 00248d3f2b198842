use serde::{Deserialize, Serialize};

/// Key into the emission factor table. The string form (`car_km`,
/// `natural_gas_kwh`, ...) is what reports and the `factors` listing show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    CarKm,
    BusKm,
    TrainKm,
    PlaneKm,
    ElectricityKwh,
    NaturalGasKwh,
    MeatKg,
    VegetarianMeal,
}

impl FactorKey {
    pub const ALL: [FactorKey; 8] = [
        FactorKey::CarKm,
        FactorKey::BusKm,
        FactorKey::TrainKm,
        FactorKey::PlaneKm,
        FactorKey::ElectricityKwh,
        FactorKey::NaturalGasKwh,
        FactorKey::MeatKg,
        FactorKey::VegetarianMeal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKey::CarKm => "car_km",
            FactorKey::BusKm => "bus_km",
            FactorKey::TrainKm => "train_km",
            FactorKey::PlaneKm => "plane_km",
            FactorKey::ElectricityKwh => "electricity_kwh",
            FactorKey::NaturalGasKwh => "natural_gas_kwh",
            FactorKey::MeatKg => "meat_kg",
            FactorKey::VegetarianMeal => "vegetarian_meal",
        }
    }

    /// kg CO2 per unit.
    const fn standard_value(self) -> f64 {
        match self {
            FactorKey::CarKm => 0.192,
            FactorKey::BusKm => 0.089,
            FactorKey::TrainKm => 0.041,
            FactorKey::PlaneKm => 0.255,
            FactorKey::ElectricityKwh => 0.475,
            FactorKey::NaturalGasKwh => 0.185,
            FactorKey::MeatKg => 27.0,
            FactorKey::VegetarianMeal => 1.5,
        }
    }
}

impl std::fmt::Display for FactorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed table of emission factors (kg CO2 per unit).
///
/// Seeded once when a ledger is built and never mutated; there is no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    values: [f64; 8],
}

impl EmissionFactors {
    pub fn standard() -> Self {
        Self {
            values: FactorKey::ALL.map(FactorKey::standard_value),
        }
    }

    pub fn get(&self, key: FactorKey) -> f64 {
        self.values[key as usize]
    }

    /// All factors in table order.
    pub fn iter(&self) -> impl Iterator<Item = (FactorKey, f64)> + '_ {
        FactorKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::standard()
    }
}
