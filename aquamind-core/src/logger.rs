use crate::{aquarium::Aquarium, error::AquaError, evaluation::StatusResult, messages::severity_color};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::{self, OpenOptions};

#[derive(Debug, Serialize)]
struct LogEntry {
    evaluated_at: String,
    aquarium_id: String,
    sub_type: String,
    main_type: String,
    severity: String,
    alert_count: usize,
    alerts_json: String,
    recommendation_keys_json: String,
    skipped_json: String,
}

/// Appends one CSV row per evaluation. The header is written only when the
/// file is new or empty, so repeated runs accumulate history.
pub struct EvaluationLogger {
    path: String,
    writer: Writer<fs::File>,
}

impl EvaluationLogger {
    pub fn new(path: &str) -> Result<Self, AquaError> {
        let is_empty = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AquaError::FileIO(path.to_string(), e))?;
        let writer = WriterBuilder::new().has_headers(is_empty).from_writer(file);
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    pub fn log_evaluation(&mut self, aquarium: &Aquarium, result: &StatusResult) -> Result<(), AquaError> {
        let alerts_json = serde_json::to_string(&result.alerts)?;
        let recommendation_keys_json = serde_json::to_string(
            &result
                .recommendations
                .iter()
                .map(|advice| {
                    serde_json::json!({ "key": advice.key, "direction": advice.direction })
                })
                .collect::<Vec<serde_json::Value>>(),
        )?;
        let skipped_json = serde_json::to_string(&result.skipped)?;

        let entry = LogEntry {
            evaluated_at: chrono::Utc::now().to_rfc3339(),
            aquarium_id: aquarium.id.clone(),
            sub_type: aquarium.sub_type.clone(),
            main_type: aquarium.main_type.to_string(),
            severity: severity_color(result.severity).to_string(),
            alert_count: result.alerts.len(),
            alerts_json,
            recommendation_keys_json,
            skipped_json,
        };

        self.writer
            .serialize(entry)
            .map_err(|e| AquaError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| AquaError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        evaluation::EvaluatorBuilder,
        history::LatestValues,
    };
    use aquamind_schemas::{aquarium::AquariumRecord, parameter::ParameterKey};
    use tempfile::NamedTempFile;

    #[test]
    fn writes_header_and_one_row_per_evaluation() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().to_str().unwrap().to_string();

        let aquarium = Aquarium::from_record(AquariumRecord {
            id: "reef-1".to_string(),
            name: "Reef".to_string(),
            volume: Some(300.0),
            main_type: Some("marine".to_string()),
            sub_type: Some("sps".to_string()),
            ..Default::default()
        })
        .unwrap();
        let evaluator = EvaluatorBuilder::new().with_builtin_catalogs().build().unwrap();
        let latest: LatestValues = [(ParameterKey::No3, 12.0)].into_iter().collect();
        let result = evaluator.evaluate(&aquarium, &latest);

        let mut logger = EvaluationLogger::new(&path).unwrap();
        logger.log_evaluation(&aquarium, &result).unwrap();
        logger.log_evaluation(&aquarium, &result).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[1], "aquarium_id");
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][4], "alert");
        assert_eq!(&rows[0][5], "1");
        assert!(rows[0][7].contains("\"no3\""));
    }

    #[test]
    fn reopening_appends_without_repeating_header() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("evaluations.csv");
        let path = path.to_str().unwrap();

        let aquarium = Aquarium::from_record(AquariumRecord {
            id: "tetras".to_string(),
            name: "Tetras".to_string(),
            volume: Some(120.0),
            main_type: Some("freshwater".to_string()),
            sub_type: Some("community".to_string()),
            ..Default::default()
        })
        .unwrap();
        let evaluator = EvaluatorBuilder::new().with_builtin_catalogs().build().unwrap();
        let result = evaluator.evaluate(&aquarium, &LatestValues::new());

        for _ in 0..2 {
            let mut logger = EvaluationLogger::new(path).unwrap();
            logger.log_evaluation(&aquarium, &result).unwrap();
        }

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().filter(|l| l.starts_with("evaluated_at")).count(), 1);
        let mut reader = csv::Reader::from_path(path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][4], "neutral");
    }
}
