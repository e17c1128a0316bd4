use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    WaterChange,
    Dosing,
    Cleaning,
    Equipment,
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Liters,
    Gallons,
}

/// An entry of an aquarium's maintenance log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceLog {
    pub id: String,
    pub kind: MaintenanceKind,
    #[serde(default)]
    pub notes: String,
    /// Only set for water changes.
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub units: Option<VolumeUnit>,
    #[serde(default)]
    pub smart_note: Option<String>,
    pub timestamp: DateTime<Utc>,
}
