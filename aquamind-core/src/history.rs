//! Reading histories: reduction to the latest value per parameter, time-window
//! filtering for charts, and validation of hand-entered values.

use crate::error::AquaError;
use aquamind_schemas::{parameter::ParameterKey, reading::ParameterReading};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The most recent value per parameter, in insertion order.
///
/// Re-inserting a key replaces its value but keeps its original position, so
/// iteration order is stable across updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestValues {
    entries: Vec<(ParameterKey, f64)>,
}

impl LatestValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parameter: ParameterKey, value: f64) {
        match self.entries.iter_mut().find(|(key, _)| *key == parameter) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((parameter, value)),
        }
    }

    pub fn get(&self, parameter: &ParameterKey) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == parameter)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, f64)> {
        self.entries.iter().map(|(key, value)| (key, *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ParameterKey, f64)> for LatestValues {
    fn from_iter<I: IntoIterator<Item = (ParameterKey, f64)>>(iter: I) -> Self {
        let mut latest = LatestValues::new();
        for (parameter, value) in iter {
            latest.insert(parameter, value);
        }
        latest
    }
}

fn sorted_by_time(readings: &[ParameterReading]) -> Vec<&ParameterReading> {
    let mut sorted: Vec<&ParameterReading> = readings.iter().collect();
    // stable: equal timestamps keep input order
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

/// Reduces a reading history to the latest value per parameter.
///
/// Readings are ordered by timestamp; on identical timestamps the one later in
/// the input wins. Keys appear in the order they first show up in time.
pub fn latest_values(readings: &[ParameterReading]) -> LatestValues {
    sorted_by_time(readings)
        .into_iter()
        .map(|r| (r.parameter.clone(), r.value))
        .collect()
}

/// Splits a history into per-parameter series, each in ascending time order.
pub fn group_by_parameter(readings: &[ParameterReading]) -> Vec<(ParameterKey, Vec<ParameterReading>)> {
    let mut groups: Vec<(ParameterKey, Vec<ParameterReading>)> = Vec::new();
    for reading in sorted_by_time(readings) {
        match groups.iter_mut().find(|(key, _)| *key == reading.parameter) {
            Some((_, series)) => series.push(reading.clone()),
            None => groups.push((reading.parameter.clone(), vec![reading.clone()])),
        }
    }
    groups
}

/// How far back a history view reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    FourMonths,
    SixMonths,
    Year,
    All,
}

impl TimeRange {
    pub fn window(&self) -> Option<Duration> {
        match self {
            TimeRange::Week => Some(Duration::days(7)),
            TimeRange::Month => Some(Duration::days(30)),
            TimeRange::FourMonths => Some(Duration::days(120)),
            TimeRange::SixMonths => Some(Duration::days(180)),
            TimeRange::Year => Some(Duration::days(365)),
            TimeRange::All => None,
        }
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "4m" | "fourmonths" => Ok(TimeRange::FourMonths),
            "6m" | "sixmonths" => Ok(TimeRange::SixMonths),
            "year" => Ok(TimeRange::Year),
            "all" => Ok(TimeRange::All),
            other => Err(format!("unknown time range '{}'", other)),
        }
    }
}

/// Keeps readings taken within `range` of `now`.
pub fn filter_by_range(
    readings: &[ParameterReading],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<ParameterReading> {
    match range.window() {
        None => readings.to_vec(),
        Some(window) => {
            let from = now - window;
            readings
                .iter()
                .filter(|r| r.timestamp >= from)
                .cloned()
                .collect()
        }
    }
}

/// Parses a hand-entered value. A comma is accepted as decimal separator;
/// empty, NaN and infinite input is rejected.
pub fn parse_reading_value(raw: &str) -> Result<f64, AquaError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AquaError::InvalidReading(raw.to_string())),
    }
}
