use crate::parameter::ParameterKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single measured value. Readings are never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterReading {
    pub id: String,
    pub parameter: ParameterKey,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}
