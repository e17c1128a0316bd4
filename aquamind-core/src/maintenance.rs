use crate::{error::AquaError, history::LatestValues};
use aquamind_schemas::{maintenance::VolumeUnit, parameter::ParameterKey};
use serde::Serialize;

pub const LITERS_PER_GALLON: f64 = 3.78541;

/// Expected dilution of nutrients by a water change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterChangeEstimate {
    pub change_liters: f64,
    /// Share of the aquarium's water replaced, at most 1.0.
    pub fraction: f64,
    pub nitrate_reduction: Option<f64>,
    pub phosphate_reduction: Option<f64>,
}

pub fn to_liters(volume: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liters => volume,
        VolumeUnit::Gallons => volume * LITERS_PER_GALLON,
    }
}

/// Estimates how much a water change lowers nitrate and phosphate, given the
/// latest readings. Nitrate is read from `no3`, falling back to `nitrate`.
pub fn estimate_water_change(
    aquarium_volume_l: f64,
    change_volume: f64,
    unit: VolumeUnit,
    latest: &LatestValues,
) -> Result<WaterChangeEstimate, AquaError> {
    if !aquarium_volume_l.is_finite() || aquarium_volume_l <= 0.0 {
        return Err(AquaError::InvalidVolume("aquarium".to_string(), aquarium_volume_l));
    }
    if !change_volume.is_finite() || change_volume <= 0.0 {
        return Err(AquaError::InvalidVolume("water change".to_string(), change_volume));
    }

    let change_liters = to_liters(change_volume, unit);
    let fraction = (change_liters / aquarium_volume_l).min(1.0);
    let nitrate = latest
        .get(&ParameterKey::No3)
        .or_else(|| latest.get(&ParameterKey::Nitrate));

    Ok(WaterChangeEstimate {
        change_liters,
        fraction,
        nitrate_reduction: nitrate.map(|v| v * fraction),
        phosphate_reduction: latest.get(&ParameterKey::Po4).map(|v| v * fraction),
    })
}
