//! Emission ledger for a personal carbon footprint.
//!
//! Activities (transportation, home energy, food) are multiplied against a
//! fixed table of emission factors and appended to an [`EmissionLedger`].
//! The ledger exposes totals, a per-category [`Summary`], chart aggregates
//! and a flat CSV report that can be read back.

pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod report;

pub use config::AnalyzerConfig;
pub use error::CoreError;
pub use ledger::EmissionLedger;
pub use model::{
    Category, EmissionEntry, EmissionFactors, EnergySource, FactorKey, FoodKind, TransportMode,
    Unit,
};
pub use report::{CategoryTotal, ChartData, Summary, TypeTotal};
