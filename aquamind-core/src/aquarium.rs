use crate::{
    classifier::{classify_main_type, ClassificationSource},
    error::AquaError,
};
use aquamind_schemas::{aquarium::AquariumRecord, parameter::MainType};
use serde::Serialize;

/// An aquarium with its main type resolved and its volume checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aquarium {
    pub id: String,
    pub name: String,
    pub volume_liters: f64,
    pub main_type: MainType,
    /// Key into the range catalog. Empty when the record had none.
    pub sub_type: String,
    pub image_url: Option<String>,
    pub classified_by: ClassificationSource,
}

impl Aquarium {
    pub fn from_record(record: AquariumRecord) -> Result<Self, AquaError> {
        let classification = classify_main_type(&record);
        let volume = record.volume.unwrap_or(f64::NAN);
        if !volume.is_finite() || volume <= 0.0 {
            return Err(AquaError::InvalidVolume(record.id, volume));
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            volume_liters: volume,
            main_type: classification.main_type,
            sub_type: record.sub_type.unwrap_or_default(),
            image_url: record.image_url,
            classified_by: classification.source,
        })
    }
}

/// Totals shown on the aquarium dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FleetSummary {
    pub total_volume_l: f64,
    pub marine_count: usize,
    pub freshwater_count: usize,
}

pub fn fleet_summary(aquariums: &[Aquarium]) -> FleetSummary {
    aquariums.iter().fold(FleetSummary::default(), |mut summary, aquarium| {
        summary.total_volume_l += aquarium.volume_liters;
        match aquarium.main_type {
            MainType::Marine => summary.marine_count += 1,
            MainType::Freshwater => summary.freshwater_count += 1,
        }
        summary
    })
}
