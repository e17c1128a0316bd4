//! Renders structured results into user-facing text. The evaluator never
//! produces prose of its own; everything a keeper reads is phrased here.

use crate::{
    evaluation::{AlertEntry, Severity, StatusResult},
    maintenance::WaterChangeEstimate,
};
use aquamind_schemas::{
    catalog::Language,
    parameter::{Direction, ParameterKey},
};

struct MessageTable {
    no_params: &'static str,
    undefined_ranges: &'static str,
    stable: &'static str,
    alert_prefix: &'static str,
    low: &'static str,
    high: &'static str,
    nitrate_reduction: &'static str,
    phosphate_reduction: &'static str,
}

const ES: MessageTable = MessageTable {
    no_params: "Registra un parámetro para ver el estado",
    undefined_ranges: "Rangos no definidos para este tipo de acuario",
    stable: "Parámetros estables",
    alert_prefix: "Alerta: ",
    low: "bajo",
    high: "alto",
    nitrate_reduction: "Puede reducir NO₃ en ~{value} ppm.",
    phosphate_reduction: "Puede reducir PO₄ en ~{value} ppm.",
};

const EN: MessageTable = MessageTable {
    no_params: "Log a parameter to see the status",
    undefined_ranges: "Ranges not defined for this aquarium type",
    stable: "Stable parameters",
    alert_prefix: "Alert: ",
    low: "low",
    high: "high",
    nitrate_reduction: "May reduce NO₃ by ~{value} ppm.",
    phosphate_reduction: "May reduce PO₄ by ~{value} ppm.",
};

/// Severity tag handed to the display layer, which owns the actual colors.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Neutral => "neutral",
        Severity::UndefinedRanges => "undefinedRanges",
        Severity::Stable => "stable",
        Severity::Alert => "alert",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn table(&self) -> &'static MessageTable {
        match self.language {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }

    pub fn direction(&self, direction: Direction) -> &'static str {
        match direction {
            Direction::Low => self.table().low,
            Direction::High => self.table().high,
        }
    }

    pub fn parameter_name(&self, alert: &AlertEntry) -> String {
        alert
            .display_name
            .get(self.language)
            .map(str::to_string)
            .unwrap_or_else(|| fallback_name(&alert.parameter))
    }

    /// e.g. "Calcio bajo"
    pub fn alert(&self, alert: &AlertEntry) -> String {
        format!("{} {}", self.parameter_name(alert), self.direction(alert.direction))
    }

    /// The one-line status shown on an aquarium card.
    pub fn summary(&self, result: &StatusResult) -> String {
        let table = self.table();
        match result.severity {
            Severity::Neutral => table.no_params.to_string(),
            Severity::UndefinedRanges => table.undefined_ranges.to_string(),
            Severity::Stable => table.stable.to_string(),
            Severity::Alert => {
                let alerts: Vec<String> = result.alerts.iter().map(|a| self.alert(a)).collect();
                format!("{}{}", table.alert_prefix, alerts.join(", "))
            }
        }
    }

    /// The note attached to a water-change log, if any nutrient was known.
    pub fn water_change_note(&self, estimate: &WaterChangeEstimate) -> Option<String> {
        let table = self.table();
        let mut notes = Vec::new();
        if let Some(reduction) = estimate.nitrate_reduction {
            notes.push(table.nitrate_reduction.replace("{value}", &format!("{:.2}", reduction)));
        }
        if let Some(reduction) = estimate.phosphate_reduction {
            notes.push(table.phosphate_reduction.replace("{value}", &format!("{:.3}", reduction)));
        }
        if notes.is_empty() {
            None
        } else {
            Some(notes.join(" "))
        }
    }
}

fn fallback_name(parameter: &ParameterKey) -> String {
    parameter.default_name().to_string()
}
