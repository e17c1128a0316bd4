//! Reference data shapes: per-sub-type parameter ranges and the advice text
//! attached to each parameter and direction.

use crate::parameter::{Direction, MainType, ParameterKey};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Languages the reference texts are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl FromStr for Language {
    type Err = String;

    /// Accepts a language code or a full locale such as `es-ES` or `en_US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered.is_empty() {
            return Err("empty language code".to_string());
        }
        if lowered.starts_with("es") {
            Ok(Language::Es)
        } else {
            Ok(Language::En)
        }
    }
}

/// A text available in one or both languages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(es: &str, en: &str) -> Self {
        Self {
            es: Some(es.to_string()),
            en: Some(en.to_string()),
        }
    }

    /// Returns the text in `language`, falling back to the other language.
    pub fn get(&self, language: Language) -> Option<&str> {
        let (preferred, fallback) = match language {
            Language::Es => (&self.es, &self.en),
            Language::En => (&self.en, &self.es),
        };
        preferred.as_deref().or(fallback.as_deref())
    }
}

/// Acceptable bounds for one parameter within one sub-type. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub parameter: ParameterKey,
    pub display_name: LocalizedText,
    pub min: f64,
    pub max: f64,
}

/// The range table of one aquarium sub-type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTypeRanges {
    pub sub_type: String,
    pub main_type: MainType,
    pub ranges: Vec<RangeEntry>,
}

impl SubTypeRanges {
    pub fn get(&self, parameter: &ParameterKey) -> Option<&RangeEntry> {
        self.ranges.iter().find(|r| &r.parameter == parameter)
    }
}

/// Advice for a value below and above range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdviceEntry {
    #[serde(default)]
    pub low: Option<LocalizedText>,
    #[serde(default)]
    pub high: Option<LocalizedText>,
}

impl AdviceEntry {
    pub fn side(&self, direction: Direction) -> Option<&LocalizedText> {
        match direction {
            Direction::Low => self.low.as_ref(),
            Direction::High => self.high.as_ref(),
        }
    }
}

/// A recommendation catalog row as written in catalog files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub key: String,
    #[serde(flatten)]
    pub advice: AdviceEntry,
}

/// Redirects advice lookups for a parameter on freshwater aquariums to a
/// freshwater-specific catalog key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceOverride {
    pub parameter: ParameterKey,
    pub freshwater_key: String,
}
