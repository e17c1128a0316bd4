//! Works out whether an aquarium is marine or freshwater from records whose
//! shape changed over the life of the application.

use aquamind_schemas::{aquarium::AquariumRecord, parameter::MainType};
use serde::Serialize;

const FRESHWATER_FIELD_MARKERS: &[&str] = &["fresh", "dulce"];
const MARINE_FIELD_MARKERS: &[&str] = &["marine", "marino", "salt", "reef"];
const FRESHWATER_SUB_TYPE_KEYWORDS: &[&str] =
    &["fresh", "dulce", "planted", "community", "goldfish", "cichlid"];

/// Which part of the record decided the main type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassificationSource {
    MainTypeField,
    LegacyTypeField,
    SubTypeKeyword,
    /// Nothing in the record pointed anywhere; marine was assumed.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub main_type: MainType,
    pub source: ClassificationSource,
}

/// Classifies a record. An explicit `mainType` wins, then the legacy `type`
/// field, then freshwater keywords in `subType`. Anything else is marine.
pub fn classify_main_type(record: &AquariumRecord) -> Classification {
    if let Some(main_type) = record.main_type.as_deref().and_then(recognize_field) {
        return Classification {
            main_type,
            source: ClassificationSource::MainTypeField,
        };
    }
    if let Some(main_type) = record.legacy_type.as_deref().and_then(recognize_field) {
        return Classification {
            main_type,
            source: ClassificationSource::LegacyTypeField,
        };
    }
    if let Some(sub_type) = record.sub_type.as_deref() {
        let lowered = sub_type.to_lowercase();
        if FRESHWATER_SUB_TYPE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Classification {
                main_type: MainType::Freshwater,
                source: ClassificationSource::SubTypeKeyword,
            };
        }
    }
    Classification {
        main_type: MainType::Marine,
        source: ClassificationSource::Default,
    }
}

fn recognize_field(raw: &str) -> Option<MainType> {
    let lowered = raw.to_lowercase();
    if FRESHWATER_FIELD_MARKERS.iter().any(|m| lowered.contains(m)) {
        Some(MainType::Freshwater)
    } else if MARINE_FIELD_MARKERS.iter().any(|m| lowered.contains(m)) {
        Some(MainType::Marine)
    } else {
        None
    }
}
