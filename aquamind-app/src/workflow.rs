use crate::config::CatalogSet;
use anyhow::{bail, Context, Result};
use aquamind_core::{
    aquarium::{fleet_summary, Aquarium},
    classifier::ClassificationSource,
    evaluation::{EvaluatorBuilder, StatusResult},
    history::{filter_by_range, group_by_parameter, latest_values, TimeRange},
    logger::EvaluationLogger,
    maintenance::estimate_water_change,
    messages::{severity_color, Messages},
    records::{read_readings_csv, read_yaml_file, readings_for, OwnedReading},
};
use aquamind_schemas::{
    catalog::Language,
    file_formats::AquariumFile,
    maintenance::{MaintenanceKind, MaintenanceLog, VolumeUnit},
    parameter::{parameters_for, MainType},
};
use serde::Serialize;
use std::path::Path;

/// Loads and validates every aquarium in a YAML file.
pub fn load_aquariums(path: &Path) -> Result<Vec<Aquarium>> {
    let file: AquariumFile = read_yaml_file(path)?;
    file.aquariums
        .into_iter()
        .map(|record| {
            let id = record.id.clone();
            Aquarium::from_record(record).with_context(|| format!("Invalid aquarium '{}'", id))
        })
        .collect()
}

fn load_readings(path: &Path) -> Result<Vec<OwnedReading>> {
    Ok(read_readings_csv(path)?)
}

#[derive(Debug, Serialize)]
struct EvaluationReport<'a> {
    aquarium: &'a Aquarium,
    summary: String,
    result: &'a StatusResult,
}

pub struct EvaluateOptions<'a> {
    pub aquariums: &'a Path,
    pub readings: &'a Path,
    pub catalog_dir: Option<&'a str>,
    pub language: Language,
    pub log_path: Option<&'a str>,
    pub json: bool,
}

/// Evaluates every aquarium against its latest readings and prints the status.
pub fn run_evaluation(options: EvaluateOptions) -> Result<()> {
    let catalogs = match options.catalog_dir {
        Some(dir) => CatalogSet::load(dir)?,
        None => CatalogSet::builtin(),
    };
    let aquariums = load_aquariums(options.aquariums)?;
    let readings = load_readings(options.readings)?;

    let evaluator = EvaluatorBuilder::new()
        .with_ranges(catalogs.ranges)
        .with_recommendations(catalogs.recommendations)
        .with_language(options.language)
        .build()?;
    let messages = Messages::new(options.language);

    let mut logger = match options.log_path {
        Some(path) => Some(
            EvaluationLogger::new(path)
                .with_context(|| format!("Failed to create evaluation log at '{}'", path))?,
        ),
        None => None,
    };

    let mut reports = Vec::new();
    let mut results = Vec::new();
    for aquarium in &aquariums {
        if aquarium.classified_by == ClassificationSource::Default {
            eprintln!(
                "Warning: aquarium '{}' has no recognizable main type; treating it as marine.",
                aquarium.id
            );
        }
        if let Err(e) = evaluator
            .get_ranges()
            .validate_sub_type(&aquarium.sub_type, aquarium.main_type)
        {
            eprintln!("Warning: {}", e);
        }

        let latest = latest_values(&readings_for(&readings, &aquarium.id));
        let result = evaluator.evaluate(aquarium, &latest);
        if let Some(logger) = logger.as_mut() {
            logger.log_evaluation(aquarium, &result)?;
        }
        results.push(result);
    }

    for (aquarium, result) in aquariums.iter().zip(results.iter()) {
        let summary = messages.summary(result);
        if options.json {
            reports.push(EvaluationReport { aquarium, summary, result });
            continue;
        }

        println!("\n--- {} ({}, {}) ---", aquarium.name, aquarium.sub_type, aquarium.main_type);
        println!("[{}] {}", severity_color(result.severity), summary);
        for parameter in &result.skipped {
            println!("  skipped {}: value is not a finite number", parameter);
        }
        for advice in &result.recommendations {
            println!("  * {}", advice.text);
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

/// Prints the reference ranges of one sub-type.
pub fn run_ranges(sub_type: &str, language: Language) -> Result<()> {
    let catalogs = CatalogSet::builtin();
    let Some(table) = catalogs.ranges.table(sub_type) else {
        bail!("No ranges are defined for sub-type '{}'", sub_type);
    };

    println!("--- {} ({}) ---", table.sub_type, table.main_type);
    for range in &table.ranges {
        let name = range
            .display_name
            .get(language)
            .unwrap_or_else(|| range.parameter.default_name());
        let unit = range.parameter.unit(table.main_type);
        println!("{:<14} {:>8} - {:<8} {}", name, range.min, range.max, unit);
    }

    let unranged: Vec<String> = parameters_for(table.main_type)
        .into_iter()
        .filter(|p| table.get(p).is_none())
        .map(|p| p.to_string())
        .collect();
    if !unranged.is_empty() {
        println!("Recorded without a reference range: {}", unranged.join(", "));
    }
    Ok(())
}

/// Lists the catalogued sub-types, optionally for one main type.
pub fn run_sub_types(main_type: Option<MainType>) -> Result<()> {
    let ranges = CatalogSet::builtin().ranges;
    let main_types = match main_type {
        Some(main_type) => vec![main_type],
        None => vec![MainType::Marine, MainType::Freshwater],
    };
    for main_type in main_types {
        println!("{}:", main_type);
        for sub_type in ranges.sub_types(main_type) {
            println!("  {}", sub_type);
        }
    }
    Ok(())
}

pub struct WaterChangeOptions<'a> {
    pub aquariums: &'a Path,
    pub readings: &'a Path,
    pub aquarium_id: &'a str,
    pub volume: f64,
    pub units: VolumeUnit,
    pub language: Language,
}

/// Builds the maintenance log entry for a water change, with its estimated
/// nutrient reduction, and prints it as JSON.
pub fn run_water_change(options: WaterChangeOptions) -> Result<()> {
    let aquariums = load_aquariums(options.aquariums)?;
    let Some(aquarium) = aquariums.iter().find(|a| a.id == options.aquarium_id) else {
        bail!("Aquarium '{}' not found", options.aquarium_id);
    };
    let readings = load_readings(options.readings)?;
    let latest = latest_values(&readings_for(&readings, &aquarium.id));

    let estimate = estimate_water_change(aquarium.volume_liters, options.volume, options.units, &latest)?;
    let now = chrono::Utc::now();
    let log = MaintenanceLog {
        id: format!("{}-{}", aquarium.id, now.format("%Y%m%d%H%M%S")),
        kind: MaintenanceKind::WaterChange,
        notes: String::new(),
        volume: Some(options.volume),
        units: Some(options.units),
        smart_note: Messages::new(options.language).water_change_note(&estimate),
        timestamp: now,
    };

    println!(
        "Water change of {:.1} L on '{}' ({:.0}% of {:.0} L).",
        estimate.change_liters,
        aquarium.name,
        estimate.fraction * 100.0,
        aquarium.volume_liters
    );
    println!("{}", serde_json::to_string_pretty(&log)?);
    Ok(())
}

/// Prints the readings of one aquarium per parameter within a time range.
pub fn run_history(readings_path: &Path, aquarium_id: &str, range: TimeRange) -> Result<()> {
    let readings = load_readings(readings_path)?;
    let history = filter_by_range(&readings_for(&readings, aquarium_id), range, chrono::Utc::now());
    if history.is_empty() {
        println!("No readings for '{}' in this range.", aquarium_id);
        return Ok(());
    }

    for (parameter, series) in group_by_parameter(&history) {
        let custom = if parameter.is_known() { "" } else { ", custom" };
        println!("--- {} ({} readings{}) ---", parameter, series.len(), custom);
        for reading in &series {
            println!("  {}  {}", reading.timestamp.format("%Y-%m-%d %H:%M"), reading.value);
        }
    }
    Ok(())
}

/// Prints the dashboard totals.
pub fn run_summary(aquariums_path: &Path) -> Result<()> {
    let aquariums = load_aquariums(aquariums_path)?;
    let summary = fleet_summary(&aquariums);
    println!("Aquariums: {}", aquariums.len());
    println!("Marine: {}", summary.marine_count);
    println!("Freshwater: {}", summary.freshwater_count);
    println!("Total volume: {:.1} L", summary.total_volume_l);
    Ok(())
}
