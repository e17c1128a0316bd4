use crate::catalog::Advice;
use aquamind_schemas::{
    catalog::LocalizedText,
    parameter::{Direction, ParameterKey},
};
use serde::Serialize;

/// Outcome category of an evaluation. Presentation maps each tag to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// No readings recorded yet.
    Neutral,
    /// The aquarium's sub-type has no range table.
    UndefinedRanges,
    Stable,
    Alert,
}

/// One parameter outside its range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEntry {
    pub parameter: ParameterKey,
    pub direction: Direction,
    pub display_name: LocalizedText,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusResult {
    pub severity: Severity,
    pub alerts: Vec<AlertEntry>,
    /// Unique by text, in the order first produced.
    pub recommendations: Vec<Advice>,
    /// Parameters whose latest value was not a finite number.
    pub skipped: Vec<ParameterKey>,
}

impl StatusResult {
    pub(crate) fn terminal(severity: Severity) -> Self {
        Self {
            severity,
            alerts: Vec::new(),
            recommendations: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn is_alert(&self) -> bool {
        self.severity == Severity::Alert
    }
}
