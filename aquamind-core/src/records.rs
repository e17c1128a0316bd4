//! Reads aquarium records and reading histories from disk.

use crate::{error::AquaError, history::parse_reading_value};
use aquamind_schemas::{parameter::ParameterKey, reading::ParameterReading};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use std::{fs, path::Path};

/// Deserializes a whole YAML file.
pub fn read_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T, AquaError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| AquaError::FileIO(display.clone(), e))?;
    serde_yaml::from_str(&content).map_err(|e| AquaError::YamlParsing(display, e))
}

#[derive(Debug, Deserialize)]
struct ReadingRow {
    id: String,
    aquarium_id: String,
    parameter: String,
    value: String,
    timestamp: String,
}

/// A reading together with the aquarium it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedReading {
    pub aquarium_id: String,
    pub reading: ParameterReading,
}

/// Reads a readings CSV with columns `id,aquarium_id,parameter,value,timestamp`.
///
/// Values go through the same validation as hand-entered ones; a malformed
/// value or timestamp fails the whole file with the offending row number.
pub fn read_readings_csv(path: &Path) -> Result<Vec<OwnedReading>, AquaError> {
    let display = path.display().to_string();
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| AquaError::CsvError(display.clone(), e))?;

    let mut readings = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let row: ReadingRow = result.map_err(|e| AquaError::CsvError(display.clone(), e))?;
        // header is line 1
        let line = index + 2;
        let value = parse_reading_value(&row.value)
            .map_err(|_| AquaError::InvalidReading(format!("{} (line {})", row.value, line)))?;
        let timestamp = DateTime::parse_from_rfc3339(row.timestamp.trim())
            .map_err(|_| AquaError::InvalidReading(format!("timestamp {} (line {})", row.timestamp, line)))?
            .with_timezone(&Utc);

        readings.push(OwnedReading {
            aquarium_id: row.aquarium_id,
            reading: ParameterReading {
                id: row.id,
                parameter: ParameterKey::parse(&row.parameter),
                value,
                timestamp,
            },
        });
    }
    Ok(readings)
}

/// The readings belonging to one aquarium, in file order.
pub fn readings_for(readings: &[OwnedReading], aquarium_id: &str) -> Vec<ParameterReading> {
    readings
        .iter()
        .filter(|r| r.aquarium_id == aquarium_id)
        .map(|r| r.reading.clone())
        .collect()
}
