use crate::{
    aquarium::AquariumRecord,
    catalog::{AdviceOverride, RecommendationEntry, SubTypeRanges},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RangeFile {
    pub schema_version: String,
    pub sub_types: Vec<SubTypeRanges>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationFile {
    pub schema_version: String,
    #[serde(default)]
    pub recommendations: Vec<RecommendationEntry>,
    #[serde(default)]
    pub overrides: Vec<AdviceOverride>,
}

#[derive(Debug, Deserialize)]
pub struct AquariumFile {
    pub schema_version: String,
    pub aquariums: Vec<AquariumRecord>,
}
