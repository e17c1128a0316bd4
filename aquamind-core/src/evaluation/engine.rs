use super::{
    comparator::compare_to_range,
    result::{AlertEntry, Severity, StatusResult},
};
use crate::{
    aquarium::Aquarium,
    catalog::{RangeCatalog, RecommendationCatalog},
    history::LatestValues,
};
use aquamind_schemas::catalog::Language;

/// Derives an aquarium's health status from its latest readings.
///
/// Holds only read-only catalogs, so one evaluator can serve any number of
/// callers at once.
#[derive(Debug, Clone)]
pub struct StatusEvaluator {
    pub(super) ranges: RangeCatalog,
    pub(super) recommendations: RecommendationCatalog,
    pub(super) language: Language,
}

impl StatusEvaluator {
    pub fn evaluate(&self, aquarium: &Aquarium, latest: &LatestValues) -> StatusResult {
        if latest.is_empty() {
            return StatusResult::terminal(Severity::Neutral);
        }

        let Some(table) = self.ranges.table(&aquarium.sub_type) else {
            return StatusResult::terminal(Severity::UndefinedRanges);
        };

        let mut result = StatusResult::terminal(Severity::Stable);
        for (parameter, value) in latest.iter() {
            if !value.is_finite() {
                result.skipped.push(parameter.clone());
                continue;
            }
            // parameters without a range for this sub-type are not evaluated
            let Some(range) = table.get(parameter) else {
                continue;
            };
            let Some(direction) = compare_to_range(value, range).direction() else {
                continue;
            };

            result.alerts.push(AlertEntry {
                parameter: parameter.clone(),
                direction,
                display_name: range.display_name.clone(),
                value,
                min: range.min,
                max: range.max,
            });

            if let Some(advice) = self.recommendations.get_advice(
                parameter,
                direction,
                aquarium.main_type,
                self.language,
            ) {
                if !result.recommendations.iter().any(|a| a.text == advice.text) {
                    result.recommendations.push(advice);
                }
            }
        }

        if !result.alerts.is_empty() {
            result.severity = Severity::Alert;
        }
        result
    }

    pub fn get_ranges(&self) -> &RangeCatalog {
        &self.ranges
    }

    pub fn get_recommendations(&self) -> &RecommendationCatalog {
        &self.recommendations
    }

    pub fn get_language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classifier::ClassificationSource, evaluation::builder::EvaluatorBuilder};
    use aquamind_schemas::{
        catalog::{AdviceEntry, LocalizedText, RangeEntry, RecommendationEntry, SubTypeRanges},
        parameter::{Direction, MainType, ParameterKey},
    };

    fn aquarium(sub_type: &str, main_type: MainType) -> Aquarium {
        Aquarium {
            id: "aq".to_string(),
            name: "Test".to_string(),
            volume_liters: 200.0,
            main_type,
            sub_type: sub_type.to_string(),
            image_url: None,
            classified_by: ClassificationSource::MainTypeField,
        }
    }

    fn evaluator() -> StatusEvaluator {
        EvaluatorBuilder::new()
            .with_builtin_catalogs()
            .with_language(Language::En)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_both_catalogs() {
        assert!(EvaluatorBuilder::new().build().is_err());
        assert!(EvaluatorBuilder::new()
            .with_ranges(RangeCatalog::builtin())
            .build()
            .is_err());
    }

    #[test]
    fn empty_input_is_neutral_even_for_unknown_sub_types() {
        let result = evaluator().evaluate(&aquarium("unknownXYZ", MainType::Marine), &LatestValues::new());
        assert_eq!(result.severity, Severity::Neutral);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn unknown_sub_type_has_undefined_ranges() {
        let latest: LatestValues = [(ParameterKey::No3, 500.0)].into_iter().collect();
        let result = evaluator().evaluate(&aquarium("unknownXYZ", MainType::Marine), &latest);
        assert_eq!(result.severity, Severity::UndefinedRanges);
        assert!(result.alerts.is_empty());
    }

    #[test]
    fn out_of_table_parameters_are_ignored() {
        let latest: LatestValues = [
            (ParameterKey::Salinity, 50.0),
            (ParameterKey::parse("boron"), 9000.0),
        ]
        .into_iter()
        .collect();
        let result = evaluator().evaluate(&aquarium("sps", MainType::Marine), &latest);
        assert_eq!(result.severity, Severity::Stable);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn non_finite_values_are_skipped_and_reported() {
        let latest: LatestValues = [
            (ParameterKey::Kh, f64::NAN),
            (ParameterKey::No3, 12.0),
        ]
        .into_iter()
        .collect();
        let result = evaluator().evaluate(&aquarium("sps", MainType::Marine), &latest);
        assert_eq!(result.severity, Severity::Alert);
        assert_eq!(result.skipped, vec![ParameterKey::Kh]);
        assert_eq!(result.alerts.len(), 1);
    }

    #[test]
    fn only_non_finite_values_is_stable_with_skips() {
        let latest: LatestValues = [(ParameterKey::Ca, f64::NAN)].into_iter().collect();
        let result = evaluator().evaluate(&aquarium("sps", MainType::Marine), &latest);
        assert_eq!(result.severity, Severity::Stable);
        assert_eq!(result.skipped, vec![ParameterKey::Ca]);
        assert!(result.alerts.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn alert_carries_value_and_bounds() {
        let latest: LatestValues = [(ParameterKey::Temp, 29.5)].into_iter().collect();
        let result = evaluator().evaluate(&aquarium("lps", MainType::Marine), &latest);
        let alert = &result.alerts[0];
        assert_eq!(alert.direction, Direction::High);
        assert_eq!((alert.value, alert.min, alert.max), (29.5, 25.0, 27.0));
        assert_eq!(alert.display_name.get(Language::En), Some("Temperature"));
        assert_eq!(result.recommendations[0].key, "temp");
    }

    #[test]
    fn alert_without_advice_is_still_reported() {
        let ranges = RangeCatalog::new(vec![SubTypeRanges {
            sub_type: "nano".to_string(),
            main_type: MainType::Marine,
            ranges: vec![RangeEntry {
                parameter: ParameterKey::parse("strontium"),
                display_name: LocalizedText::new("Estroncio", "Strontium"),
                min: 8.0,
                max: 10.0,
            }],
        }])
        .unwrap();
        let evaluator = EvaluatorBuilder::new()
            .with_ranges(ranges)
            .with_recommendations(RecommendationCatalog::default())
            .build()
            .unwrap();
        let latest: LatestValues = [(ParameterKey::parse("strontium"), 4.0)].into_iter().collect();
        let result = evaluator.evaluate(&aquarium("nano", MainType::Marine), &latest);
        assert_eq!(result.severity, Severity::Alert);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn shared_advice_text_appears_once() {
        let ranges = RangeCatalog::new(vec![SubTypeRanges {
            sub_type: "nano".to_string(),
            main_type: MainType::Marine,
            ranges: vec![
                RangeEntry {
                    parameter: ParameterKey::No3,
                    display_name: LocalizedText::new("Nitratos", "Nitrate"),
                    min: 1.0,
                    max: 5.0,
                },
                RangeEntry {
                    parameter: ParameterKey::Po4,
                    display_name: LocalizedText::new("Fosfatos", "Phosphate"),
                    min: 0.01,
                    max: 0.1,
                },
            ],
        }])
        .unwrap();
        let same = AdviceEntry {
            low: None,
            high: Some(LocalizedText::new("Cambia agua.", "Change water.")),
        };
        let recommendations = RecommendationCatalog::new(
            vec![
                RecommendationEntry { key: "no3".to_string(), advice: same.clone() },
                RecommendationEntry { key: "po4".to_string(), advice: same },
            ],
            Default::default(),
        );
        let evaluator = EvaluatorBuilder::new()
            .with_ranges(ranges)
            .with_recommendations(recommendations)
            .build()
            .unwrap();

        let latest: LatestValues = [(ParameterKey::No3, 20.0), (ParameterKey::Po4, 0.5)]
            .into_iter()
            .collect();
        let result = evaluator.evaluate(&aquarium("nano", MainType::Marine), &latest);
        assert_eq!(result.alerts.len(), 2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].key, "no3");
    }

    #[test]
    fn freshwater_nitrate_keys_share_one_recommendation() {
        let latest: LatestValues = [(ParameterKey::No3, 60.0), (ParameterKey::Nitrate, 55.0)]
            .into_iter()
            .collect();
        let result = evaluator().evaluate(&aquarium("community", MainType::Freshwater), &latest);
        assert_eq!(result.alerts.len(), 2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].key, "nitrate_fw");
    }

    #[test]
    fn language_selects_advice_text() {
        let spanish = EvaluatorBuilder::new().with_builtin_catalogs().build().unwrap();
        let latest: LatestValues = [(ParameterKey::Kh, 5.0)].into_iter().collect();
        let result = spanish.evaluate(&aquarium("sps", MainType::Marine), &latest);
        assert!(result.recommendations[0].text.starts_with("Añade un buffer de KH"));
    }
}
