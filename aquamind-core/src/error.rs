use aquamind_schemas::parameter::{MainType, ParameterKey};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AquaError {
    #[error("Range for '{parameter}' in sub-type '{sub_type}' is invalid: min {min}, max {max}")]
    InvalidRange {
        sub_type: String,
        parameter: ParameterKey,
        min: f64,
        max: f64,
    },

    #[error("Invalid volume for '{0}': {1}")]
    InvalidVolume(String, f64),

    #[error("'{0}' is not a valid reading value")]
    InvalidReading(String),

    #[error("The {0} catalog has not been provided")]
    CatalogNotDefined(&'static str),

    #[error("Sub-type '{sub_type}' is defined for {expected} aquariums, but the aquarium is {actual}")]
    SubTypeMismatch {
        sub_type: String,
        expected: MainType,
        actual: MainType,
    },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
