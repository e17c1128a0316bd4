use serde::{Deserialize, Serialize};

/// An aquarium as stored by the persistence layer.
///
/// The shape changed over time: older records carry a `type` field instead of
/// `mainType`, and some carry only a `subType`. Nothing here is normalized;
/// classification happens in the core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquariumRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub main_type: Option<String>,
    #[serde(default, rename = "type")]
    pub legacy_type: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
