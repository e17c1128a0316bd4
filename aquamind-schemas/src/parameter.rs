//! The water-quality vocabulary shared by every record and catalog: aquarium
//! main types, parameter keys and the direction a reading leaves its range in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level aquarium classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainType {
    Marine,
    Freshwater,
}

impl MainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainType::Marine => "marine",
            MainType::Freshwater => "freshwater",
        }
    }
}

impl fmt::Display for MainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "marine" => Ok(MainType::Marine),
            "freshwater" => Ok(MainType::Freshwater),
            other => Err(format!("unknown main type '{}'", other)),
        }
    }
}

/// Which side of a reference range a reading falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Low,
    High,
}

/// A measurable water-quality metric.
///
/// The fixed vocabulary covers everything the entry forms offer. Keys outside
/// it are kept verbatim in `Other` so readings can be recorded before any
/// reference data exists for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterKey {
    Kh,
    Ca,
    Mg,
    No3,
    Po4,
    Salinity,
    Temp,
    Ph,
    Gh,
    Ammonia,
    Nitrite,
    Nitrate,
    Iron,
    Co2,
    Tds,
    Other(String),
}

impl ParameterKey {
    /// Every key of the fixed vocabulary, in entry-form order.
    pub const KNOWN: [ParameterKey; 15] = [
        ParameterKey::Kh,
        ParameterKey::Ca,
        ParameterKey::Mg,
        ParameterKey::No3,
        ParameterKey::Po4,
        ParameterKey::Salinity,
        ParameterKey::Temp,
        ParameterKey::Ph,
        ParameterKey::Gh,
        ParameterKey::Ammonia,
        ParameterKey::Nitrite,
        ParameterKey::Nitrate,
        ParameterKey::Iron,
        ParameterKey::Co2,
        ParameterKey::Tds,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ParameterKey::Kh => "kh",
            ParameterKey::Ca => "ca",
            ParameterKey::Mg => "mg",
            ParameterKey::No3 => "no3",
            ParameterKey::Po4 => "po4",
            ParameterKey::Salinity => "salinity",
            ParameterKey::Temp => "temp",
            ParameterKey::Ph => "ph",
            ParameterKey::Gh => "gh",
            ParameterKey::Ammonia => "ammonia",
            ParameterKey::Nitrite => "nitrite",
            ParameterKey::Nitrate => "nitrate",
            ParameterKey::Iron => "iron",
            ParameterKey::Co2 => "co2",
            ParameterKey::Tds => "tds",
            ParameterKey::Other(key) => key,
        }
    }

    /// Parses a key, mapping anything outside the fixed vocabulary to `Other`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        Self::KNOWN
            .iter()
            .find(|k| k.as_str() == lowered)
            .cloned()
            .unwrap_or_else(|| ParameterKey::Other(trimmed.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ParameterKey::Other(_))
    }

    /// The unit readings of this parameter are entered in.
    pub fn unit(&self, main_type: MainType) -> &'static str {
        match self {
            ParameterKey::Kh => match main_type {
                MainType::Marine => "dKH",
                MainType::Freshwater => "°dKH",
            },
            ParameterKey::Salinity => "ppt",
            ParameterKey::Temp => "°C",
            ParameterKey::Ph => "",
            ParameterKey::Gh => "°dGH",
            ParameterKey::Other(_) => "",
            _ => "ppm",
        }
    }

    /// English fallback name used when no catalog provides one.
    pub fn default_name(&self) -> &str {
        match self {
            ParameterKey::Kh => "Alkalinity (KH)",
            ParameterKey::Ca => "Calcium (Ca)",
            ParameterKey::Mg => "Magnesium (Mg)",
            ParameterKey::No3 => "Nitrate (NO₃)",
            ParameterKey::Po4 => "Phosphate (PO₄)",
            ParameterKey::Salinity => "Salinity",
            ParameterKey::Temp => "Temperature",
            ParameterKey::Ph => "pH",
            ParameterKey::Gh => "General Hardness (GH)",
            ParameterKey::Ammonia => "Ammonia",
            ParameterKey::Nitrite => "Nitrite",
            ParameterKey::Nitrate => "Nitrate",
            ParameterKey::Iron => "Iron (Fe)",
            ParameterKey::Co2 => "CO₂",
            ParameterKey::Tds => "TDS",
            ParameterKey::Other(key) => key,
        }
    }
}

impl From<String> for ParameterKey {
    fn from(raw: String) -> Self {
        ParameterKey::parse(&raw)
    }
}

impl From<ParameterKey> for String {
    fn from(key: ParameterKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters offered for entry on an aquarium of the given main type.
pub fn parameters_for(main_type: MainType) -> Vec<ParameterKey> {
    use ParameterKey::*;
    match main_type {
        MainType::Marine => vec![Kh, Ca, Mg, No3, Po4, Salinity, Temp, Ph],
        MainType::Freshwater => vec![Ph, Gh, Kh, Ammonia, Nitrite, Nitrate, Iron, Co2, Tds, Temp],
    }
}
