use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{
    capitalize, Category, EmissionEntry, EmissionFactors, EnergySource, FactorKey, FoodKind,
    TransportMode, Unit,
};

/// Append-only, insertion-ordered collection of emission entries for one
/// session, together with the factor table used to price them.
///
/// Entries are only ever appended by the `add_*` operations or discarded all
/// at once by [`clear`](Self::clear). A rejected add never mutates the ledger.
#[derive(Debug, Clone, Default)]
pub struct EmissionLedger {
    factors: EmissionFactors,
    entries: Vec<EmissionEntry>,
}

impl EmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn entries(&self) -> &[EmissionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a trip of `distance` km.
    pub fn add_transportation(
        &mut self,
        mode: TransportMode,
        distance: f64,
    ) -> Result<&EmissionEntry, CoreError> {
        check_amount(distance)?;
        let co2_kg = distance * self.factors.get(mode.factor_key());
        Ok(self.push(EmissionEntry {
            category: Category::Transportation,
            kind: capitalize(mode.as_str()),
            amount: distance,
            unit: Unit::Km,
            co2_kg,
        }))
    }

    /// Record `amount` kWh of home energy use.
    pub fn add_energy(
        &mut self,
        source: EnergySource,
        amount: f64,
    ) -> Result<&EmissionEntry, CoreError> {
        check_amount(amount)?;
        let co2_kg = amount * self.factors.get(source.factor_key());
        Ok(self.push(EmissionEntry {
            category: Category::Energy,
            kind: capitalize(source.as_str()),
            amount,
            unit: Unit::KWh,
            co2_kg,
        }))
    }

    /// Record food consumption: kg for meat, number of meals for vegetarian.
    pub fn add_food(&mut self, kind: FoodKind, quantity: f64) -> Result<&EmissionEntry, CoreError> {
        check_amount(quantity)?;
        let (factor, unit) = match kind {
            FoodKind::Meat => (self.factors.get(FactorKey::MeatKg), Unit::Kg),
            FoodKind::Vegetarian => (self.factors.get(FactorKey::VegetarianMeal), Unit::Meals),
        };
        Ok(self.push(EmissionEntry {
            category: Category::Food,
            kind: capitalize(kind.as_str()),
            amount: quantity,
            unit,
            co2_kg: quantity * factor,
        }))
    }

    /// Like [`add_transportation`](Self::add_transportation) but parses the
    /// mode from raw input first.
    pub fn add_transportation_str(
        &mut self,
        mode: &str,
        distance: f64,
    ) -> Result<&EmissionEntry, CoreError> {
        let mode = parse_input::<TransportMode>(mode)?;
        self.add_transportation(mode, distance)
    }

    pub fn add_energy_str(
        &mut self,
        energy_type: &str,
        amount: f64,
    ) -> Result<&EmissionEntry, CoreError> {
        let source = parse_input::<EnergySource>(energy_type)?;
        self.add_energy(source, amount)
    }

    pub fn add_food_str(
        &mut self,
        meal_type: &str,
        quantity: f64,
    ) -> Result<&EmissionEntry, CoreError> {
        let kind = parse_input::<FoodKind>(meal_type)?;
        self.add_food(kind, quantity)
    }

    /// Sum of `co2_kg` over all entries; 0 when empty.
    pub fn get_total_emissions(&self) -> f64 {
        self.entries.iter().map(|e| e.co2_kg).sum()
    }

    /// Discard every entry. The factor table is kept.
    pub fn clear(&mut self) {
        debug!(discarded = self.entries.len(), "ledger cleared");
        self.entries.clear();
    }

    /// Append a previously computed entry (used when reading a report back).
    pub(crate) fn restore(&mut self, entry: EmissionEntry) {
        self.entries.push(entry);
    }

    fn push(&mut self, entry: EmissionEntry) -> &EmissionEntry {
        debug!(
            category = %entry.category,
            kind = %entry.kind,
            amount = entry.amount,
            co2_kg = entry.co2_kg,
            "entry added"
        );
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }
}

fn check_amount(amount: f64) -> Result<(), CoreError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        warn!(amount, "rejected non-positive amount");
        Err(CoreError::InvalidAmount { amount })
    }
}

fn parse_input<T>(value: &str) -> Result<T, CoreError>
where
    T: std::str::FromStr<Err = CoreError>,
{
    value.parse::<T>().inspect_err(|e| warn!("{e}"))
}
