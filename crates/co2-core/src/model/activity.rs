use serde::{Deserialize, Serialize};

use super::category::Unit;
use super::factors::FactorKey;
use crate::error::CoreError;

/// Recognized transportation modes. Parsed case-sensitively from the
/// lowercase names `car`, `bus`, `train`, `plane`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Plane,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Plane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Plane => "plane",
        }
    }

    pub fn factor_key(&self) -> FactorKey {
        match self {
            TransportMode::Car => FactorKey::CarKm,
            TransportMode::Bus => FactorKey::BusKm,
            TransportMode::Train => FactorKey::TrainKm,
            TransportMode::Plane => FactorKey::PlaneKm,
        }
    }
}

/// Recognized home energy sources, measured in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Electricity,
    NaturalGas,
}

impl EnergySource {
    pub const ALL: [EnergySource; 2] = [EnergySource::Electricity, EnergySource::NaturalGas];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergySource::Electricity => "electricity",
            EnergySource::NaturalGas => "natural_gas",
        }
    }

    pub fn factor_key(&self) -> FactorKey {
        match self {
            EnergySource::Electricity => FactorKey::ElectricityKwh,
            EnergySource::NaturalGas => FactorKey::NaturalGasKwh,
        }
    }
}

/// Recognized food kinds. Unlike the other categories the unit depends on
/// the kind: meat is weighed in kg, vegetarian food is counted in meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKind {
    Meat,
    Vegetarian,
}

impl FoodKind {
    pub const ALL: [FoodKind; 2] = [FoodKind::Meat, FoodKind::Vegetarian];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodKind::Meat => "meat",
            FoodKind::Vegetarian => "vegetarian",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            FoodKind::Meat => Unit::Kg,
            FoodKind::Vegetarian => Unit::Meals,
        }
    }
}

macro_rules! impl_vocabulary {
    ($ty:ident, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| CoreError::UnknownCategory {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_vocabulary!(TransportMode, "mode");
impl_vocabulary!(EnergySource, "energy type");
impl_vocabulary!(FoodKind, "meal type");
