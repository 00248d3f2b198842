use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::CoreError;
use crate::ledger::EmissionLedger;
use crate::model::{
    capitalize, Category, EmissionEntry, EnergySource, FoodKind, TransportMode, Unit,
};

/// Column order of a saved report.
pub const CSV_HEADER: [&str; 5] = ["category", "type", "amount", "unit", "co2_kg"];

impl EmissionLedger {
    /// Write every entry as a CSV row (header first) and return the number of
    /// rows written. An empty ledger writes nothing and returns 0.
    ///
    /// Numbers keep full precision; rounding is left to display code.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize, CoreError> {
        if self.is_empty() {
            return Ok(0);
        }
        let mut wtr = csv::Writer::from_writer(writer);
        for entry in self.entries() {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(self.len())
    }

    /// Save the report to `path`. Nothing is created for an empty ledger.
    pub fn save_report(&self, path: impl AsRef<Path>) -> Result<usize, CoreError> {
        let path = path.as_ref();
        if self.is_empty() {
            info!("no emissions to save");
            return Ok(0);
        }
        let file = File::create(path)?;
        let rows = self.write_csv(file)?;
        info!(path = %path.display(), rows, "report saved");
        Ok(rows)
    }

    /// Rebuild a ledger from a report produced by [`write_csv`](Self::write_csv).
    pub fn read_csv<R: Read>(reader: R) -> Result<Self, CoreError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?.clone();
        if headers.iter().ne(CSV_HEADER.iter().copied()) {
            return Err(CoreError::Parse(format!(
                "unexpected report header '{}', expected '{}'",
                headers.iter().collect::<Vec<_>>().join(","),
                CSV_HEADER.join(",")
            )));
        }

        let mut ledger = EmissionLedger::new();
        for (index, row) in rdr.deserialize::<EmissionEntry>().enumerate() {
            let entry = row?;
            // Header is line 1.
            validate_row(&entry, index + 2)?;
            ledger.restore(entry);
        }
        Ok(ledger)
    }

    pub fn load_report(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let ledger = Self::read_csv(File::open(path)?)?;
        info!(path = %path.display(), rows = ledger.len(), "report loaded");
        Ok(ledger)
    }
}

fn validate_row(entry: &EmissionEntry, line: usize) -> Result<(), CoreError> {
    // The label must be one an add operation produces, with that type's unit.
    let (name, unit) = match entry.category {
        Category::Transportation => {
            let mode = parse_label::<TransportMode>(entry, line)?;
            (mode.as_str(), Unit::Km)
        }
        Category::Energy => {
            let source = parse_label::<EnergySource>(entry, line)?;
            (source.as_str(), Unit::KWh)
        }
        Category::Food => {
            let kind = parse_label::<FoodKind>(entry, line)?;
            (kind.as_str(), kind.unit())
        }
    };
    if entry.kind != capitalize(name) {
        return Err(CoreError::Parse(format!(
            "line {line}: type '{}' should be written '{}'",
            entry.kind,
            capitalize(name)
        )));
    }
    if entry.unit != unit {
        return Err(CoreError::Parse(format!(
            "line {line}: unit '{}' does not match {} {}, expected '{unit}'",
            entry.unit, entry.category, entry.kind
        )));
    }
    if !(entry.amount.is_finite() && entry.amount > 0.0) {
        return Err(CoreError::Parse(format!(
            "line {line}: amount must be positive, got {}",
            entry.amount
        )));
    }
    if !(entry.co2_kg.is_finite() && entry.co2_kg >= 0.0) {
        return Err(CoreError::Parse(format!(
            "line {line}: invalid co2_kg {}",
            entry.co2_kg
        )));
    }
    Ok(())
}

fn parse_label<T>(entry: &EmissionEntry, line: usize) -> Result<T, CoreError>
where
    T: std::str::FromStr<Err = CoreError>,
{
    entry.kind.to_lowercase().parse::<T>().map_err(|_| {
        CoreError::Parse(format!(
            "line {line}: unknown {} type '{}'",
            entry.category, entry.kind
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmissionLedger {
        let mut ledger = EmissionLedger::new();
        ledger.add_transportation(TransportMode::Car, 100.0).unwrap();
        ledger.add_energy(EnergySource::NaturalGas, 150.0).unwrap();
        ledger.add_food(FoodKind::Vegetarian, 10.0).unwrap();
        ledger
    }

    #[test]
    fn test_header_and_row_layout() {
        let mut buf = Vec::new();
        let rows = sample().write_csv(&mut buf).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "category,type,amount,unit,co2_kg");
        assert_eq!(lines[1], "Transportation,Car,100.0,km,19.2");
        assert!(lines[2].starts_with("Energy,Natural_gas,150.0,kWh,27.75"));
        assert_eq!(lines[3], "Food,Vegetarian,10.0,meals,15.0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let mut buf = Vec::new();
        assert_eq!(EmissionLedger::new().write_csv(&mut buf).unwrap(), 0);
        assert!(buf.is_empty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("co2_report.csv");
        assert_eq!(EmissionLedger::new().save_report(&path).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_load_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("co2_report.csv");
        let original = sample();
        assert_eq!(original.save_report(&path).unwrap(), 3);

        let loaded = EmissionLedger::load_report(&path).unwrap();
        assert_eq!(loaded.entries(), original.entries());
        assert_eq!(
            loaded.get_total_emissions(),
            original.get_total_emissions()
        );
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let data = "category,kind,amount,unit,co2\nFood,Meat,1.0,kg,27.0\n";
        let err = EmissionLedger::read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn test_read_rejects_unknown_category() {
        let data = "category,type,amount,unit,co2_kg\nWater,Shower,10.0,km,1.0\n";
        let err = EmissionLedger::read_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::Csv(_)));
    }

    #[test]
    fn test_read_rejects_mismatched_unit_and_bad_amount() {
        let data = "category,type,amount,unit,co2_kg\nEnergy,Electricity,10.0,km,4.75\n";
        let err = EmissionLedger::read_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let data = "category,type,amount,unit,co2_kg\nFood,Meat,-1.0,kg,27.0\n";
        let err = EmissionLedger::read_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("amount must be positive"));
    }

    #[test]
    fn test_read_rejects_rows_no_add_could_produce() {
        let rows = [
            "Transportation,Rocket,10.0,km,999.0",
            "Food,Vegetarian,1.0,kg,27.0",
            "Food,Meat,1.0,meals,27.0",
            "Energy,Car,5.0,kWh,0.96",
            "Transportation,CAR,5.0,km,0.96",
        ];
        for row in rows {
            let data = format!("category,type,amount,unit,co2_kg\nFood,Meat,1.0,kg,27.0\n{row}\n");
            let err = EmissionLedger::read_csv(data.as_bytes()).unwrap_err();
            assert!(matches!(err, CoreError::Parse(_)), "{row}: {err}");
            assert!(err.to_string().contains("line 3"), "{row}: {err}");
        }
    }

    #[test]
    fn test_read_accepts_every_add_label() {
        let mut ledger = EmissionLedger::new();
        for mode in TransportMode::ALL {
            ledger.add_transportation(mode, 1.0).unwrap();
        }
        for source in EnergySource::ALL {
            ledger.add_energy(source, 1.0).unwrap();
        }
        for kind in FoodKind::ALL {
            ledger.add_food(kind, 1.0).unwrap();
        }
        let mut buf = Vec::new();
        ledger.write_csv(&mut buf).unwrap();
        let loaded = EmissionLedger::read_csv(buf.as_slice()).unwrap();
        assert_eq!(loaded.entries(), ledger.entries());
    }
}
