pub mod activity;
pub mod category;
pub mod entry;
pub mod factors;

pub use activity::{EnergySource, FoodKind, TransportMode};
pub use category::{Category, Unit};
pub use entry::EmissionEntry;
pub use factors::{EmissionFactors, FactorKey};

/// Upper-case the first character and lower-case the rest, the way entry
/// type labels are displayed (`natural_gas` -> `Natural_gas`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
