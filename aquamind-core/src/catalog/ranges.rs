use crate::error::AquaError;
use aquamind_schemas::{
    catalog::{LocalizedText, RangeEntry, SubTypeRanges},
    parameter::{MainType, ParameterKey},
};

/// Reference ranges per aquarium sub-type.
///
/// Tables keep the order they were added in, which is also the order
/// sub-types are offered in when an aquarium is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeCatalog {
    tables: Vec<SubTypeRanges>,
}

impl RangeCatalog {
    /// Builds a catalog from explicit tables, rejecting inverted or non-finite bounds.
    /// A later table with the same sub-type key replaces an earlier one.
    pub fn new(tables: Vec<SubTypeRanges>) -> Result<Self, AquaError> {
        let mut catalog = Self::default();
        for table in tables {
            validate_table(&table)?;
            catalog.upsert(table);
        }
        Ok(catalog)
    }

    /// The ranges shipped with the application.
    pub fn builtin() -> Self {
        Self {
            tables: builtin_tables(),
        }
    }

    pub fn table(&self, sub_type: &str) -> Option<&SubTypeRanges> {
        self.tables.iter().find(|t| t.sub_type == sub_type)
    }

    pub fn get_range(&self, sub_type: &str, parameter: &ParameterKey) -> Option<&RangeEntry> {
        self.table(sub_type)?.get(parameter)
    }

    pub fn contains(&self, sub_type: &str) -> bool {
        self.table(sub_type).is_some()
    }

    /// Sub-type keys defined for `main_type`, in catalog order.
    pub fn sub_types(&self, main_type: MainType) -> Vec<&str> {
        self.tables
            .iter()
            .filter(|t| t.main_type == main_type)
            .map(|t| t.sub_type.as_str())
            .collect()
    }

    pub fn tables(&self) -> &[SubTypeRanges] {
        &self.tables
    }

    /// Overlays `other` on this catalog. Whole sub-type tables are replaced.
    pub fn merge(&mut self, other: RangeCatalog) {
        for table in other.tables {
            self.upsert(table);
        }
    }

    /// Checks that a catalogued sub-type belongs to the aquarium's main type.
    /// Sub-types missing from the catalog pass; they evaluate to undefined ranges.
    pub fn validate_sub_type(&self, sub_type: &str, main_type: MainType) -> Result<(), AquaError> {
        match self.table(sub_type) {
            Some(table) if table.main_type != main_type => Err(AquaError::SubTypeMismatch {
                sub_type: sub_type.to_string(),
                expected: table.main_type,
                actual: main_type,
            }),
            _ => Ok(()),
        }
    }

    fn upsert(&mut self, table: SubTypeRanges) {
        match self.tables.iter_mut().find(|t| t.sub_type == table.sub_type) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }
}

fn validate_table(table: &SubTypeRanges) -> Result<(), AquaError> {
    for entry in &table.ranges {
        if !entry.min.is_finite() || !entry.max.is_finite() || entry.min > entry.max {
            return Err(AquaError::InvalidRange {
                sub_type: table.sub_type.clone(),
                parameter: entry.parameter.clone(),
                min: entry.min,
                max: entry.max,
            });
        }
    }
    Ok(())
}

fn display_name(parameter: &ParameterKey) -> LocalizedText {
    match parameter {
        ParameterKey::Kh => LocalizedText::new("KH", "KH"),
        ParameterKey::Ca => LocalizedText::new("Calcio", "Calcium"),
        ParameterKey::Mg => LocalizedText::new("Magnesio", "Magnesium"),
        ParameterKey::No3 => LocalizedText::new("Nitratos", "Nitrate"),
        ParameterKey::Po4 => LocalizedText::new("Fosfatos", "Phosphate"),
        ParameterKey::Temp => LocalizedText::new("Temperatura", "Temperature"),
        ParameterKey::Ph => LocalizedText::new("pH", "pH"),
        ParameterKey::Gh => LocalizedText::new("GH", "GH"),
        ParameterKey::Ammonia => LocalizedText::new("Amonio", "Ammonia"),
        ParameterKey::Nitrite => LocalizedText::new("Nitrito", "Nitrite"),
        ParameterKey::Nitrate => LocalizedText::new("Nitrato", "Nitrate"),
        ParameterKey::Iron => LocalizedText::new("Hierro", "Iron"),
        ParameterKey::Salinity => LocalizedText::new("Salinidad", "Salinity"),
        ParameterKey::Co2 => LocalizedText::new("CO₂", "CO₂"),
        ParameterKey::Tds => LocalizedText::new("TDS", "TDS"),
        ParameterKey::Other(key) => LocalizedText::new(key, key),
    }
}

fn table(sub_type: &str, main_type: MainType, bounds: &[(ParameterKey, f64, f64)]) -> SubTypeRanges {
    SubTypeRanges {
        sub_type: sub_type.to_string(),
        main_type,
        ranges: bounds
            .iter()
            .map(|(parameter, min, max)| RangeEntry {
                parameter: parameter.clone(),
                display_name: display_name(parameter),
                min: *min,
                max: *max,
            })
            .collect(),
    }
}

// Freshwater tables list `nitrate` alongside `no3` with the same bounds, since the
// freshwater entry form records nitrate under its long key.
fn builtin_tables() -> Vec<SubTypeRanges> {
    use MainType::{Freshwater, Marine};
    use ParameterKey::*;

    vec![
        table("fishOnly", Marine, &[
            (Kh, 7.0, 12.0),
            (Ca, 380.0, 450.0),
            (Mg, 1250.0, 1400.0),
            (No3, 1.0, 20.0),
            (Po4, 0.02, 0.2),
            (Temp, 24.0, 27.0),
        ]),
        table("softCorals", Marine, &[
            (Kh, 7.0, 11.0),
            (Ca, 400.0, 450.0),
            (Mg, 1250.0, 1410.0),
            (No3, 2.0, 15.0),
            (Po4, 0.06, 0.15),
            (Temp, 24.0, 27.0),
        ]),
        table("lps", Marine, &[
            (Kh, 7.0, 12.0),
            (Ca, 400.0, 450.0),
            (Mg, 1280.0, 1410.0),
            (No3, 2.0, 10.0),
            (Po4, 0.04, 0.12),
            (Temp, 25.0, 27.0),
        ]),
        table("sps", Marine, &[
            (Kh, 7.0, 9.0),
            (Ca, 420.0, 460.0),
            (Mg, 1300.0, 1410.0),
            (No3, 1.0, 5.0),
            (Po4, 0.01, 0.1),
            (Temp, 25.0, 27.0),
        ]),
        table("mixedReef", Marine, &[
            (Kh, 8.0, 12.0),
            (Ca, 400.0, 450.0),
            (Mg, 1280.0, 1410.0),
            (No3, 2.0, 10.0),
            (Po4, 0.02, 0.1),
            (Temp, 25.0, 27.0),
        ]),
        table("community", Freshwater, &[
            (Ph, 6.5, 7.8),
            (Gh, 4.0, 12.0),
            (Kh, 3.0, 8.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 0.0, 40.0),
            (Nitrate, 0.0, 40.0),
            (Po4, 0.0, 2.0),
            (Temp, 22.0, 26.0),
        ]),
        table("plantedLow", Freshwater, &[
            (Ph, 6.4, 7.2),
            (Gh, 3.0, 10.0),
            (Kh, 2.0, 6.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 5.0, 20.0),
            (Nitrate, 5.0, 20.0),
            (Po4, 0.3, 1.0),
            (Iron, 0.05, 0.2),
            (Temp, 22.0, 26.0),
        ]),
        table("plantedMid", Freshwater, &[
            (Ph, 6.2, 7.0),
            (Gh, 3.0, 9.0),
            (Kh, 1.5, 5.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 7.5, 22.5),
            (Nitrate, 7.5, 22.5),
            (Po4, 0.65, 1.5),
            (Iron, 0.05, 0.35),
            (Temp, 22.0, 25.5),
        ]),
        table("plantedHigh", Freshwater, &[
            (Ph, 6.0, 6.8),
            (Gh, 3.0, 8.0),
            (Kh, 1.0, 4.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 10.0, 25.0),
            (Nitrate, 10.0, 25.0),
            (Po4, 1.0, 2.0),
            (Iron, 0.05, 0.5),
            (Temp, 22.0, 25.0),
        ]),
        table("goldfish", Freshwater, &[
            (Ph, 6.8, 7.6),
            (Gh, 4.0, 12.0),
            (Kh, 4.0, 8.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 10.0, 40.0),
            (Nitrate, 10.0, 40.0),
            (Po4, 0.0, 2.0),
            (Iron, 0.0, 0.1),
            (Temp, 18.0, 23.0),
        ]),
        table("americanCichlids", Freshwater, &[
            (Ph, 6.4, 7.4),
            (Gh, 3.0, 12.0),
            (Kh, 3.0, 8.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 5.0, 30.0),
            (Nitrate, 5.0, 30.0),
            (Po4, 0.0, 1.0),
            (Iron, 0.0, 0.1),
            (Temp, 24.0, 28.0),
        ]),
        table("africanCichlids", Freshwater, &[
            (Ph, 7.8, 8.6),
            (Gh, 8.0, 20.0),
            (Kh, 7.0, 12.0),
            (Ammonia, 0.0, 0.02),
            (Nitrite, 0.0, 0.1),
            (No3, 5.0, 40.0),
            (Nitrate, 5.0, 40.0),
            (Po4, 0.0, 2.0),
            (Iron, 0.0, 0.05),
            (Temp, 24.0, 27.0),
        ]),
    ]
}
