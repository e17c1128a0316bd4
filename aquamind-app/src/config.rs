use anyhow::{Context, Result};
use aquamind_core::catalog::{AdviceOverrides, RangeCatalog, RecommendationCatalog};
use aquamind_schemas::file_formats::{RangeFile, RecommendationFile};
use std::{fs, path::Path, path::PathBuf};

/// The reference data an evaluation run works with: the built-in catalogs,
/// optionally overlaid with YAML files from a catalog directory.
pub struct CatalogSet {
    pub ranges: RangeCatalog,
    pub recommendations: RecommendationCatalog,
}

impl CatalogSet {
    pub fn builtin() -> Self {
        Self {
            ranges: RangeCatalog::builtin(),
            recommendations: RecommendationCatalog::builtin(),
        }
    }

    /// Loads `<base_path>/ranges` and `<base_path>/recommendations` over the
    /// built-ins. Either directory may be missing. Progress goes to stderr so
    /// stdout stays machine-readable.
    pub fn load(base_path: &str) -> Result<Self> {
        eprintln!("Loading catalogs from '{}'...", base_path);
        let mut catalogs = Self::builtin();

        let range_tables = load_yaml_files(
            Path::new(base_path).join("ranges"),
            |file: RangeFile| file.sub_types,
        )?;
        let ranges = RangeCatalog::new(range_tables)
            .with_context(|| format!("Invalid range data in '{}'", base_path))?;
        catalogs.ranges.merge(ranges);

        let mut entries = Vec::new();
        let mut overrides = Vec::new();
        for file in load_yaml_files(Path::new(base_path).join("recommendations"), |file: RecommendationFile| vec![file])? {
            entries.extend(file.recommendations);
            overrides.extend(file.overrides);
        }
        catalogs
            .recommendations
            .merge(RecommendationCatalog::new(entries, AdviceOverrides::new(overrides)));

        eprintln!(
            "Catalogs loaded: {} sub-types.",
            catalogs.ranges.tables().len()
        );
        Ok(catalogs)
    }
}

/// Reads every YAML file in a directory, in file-name order, and collects the
/// items each file wrapper yields. A missing directory yields nothing.
fn load_yaml_files<P, F, E, T>(dir_path: P, extract_vec: E) -> Result<Vec<T>>
where
    P: AsRef<Path>,
    F: for<'de> serde::Deserialize<'de>,
    E: Fn(F) -> Vec<T>,
{
    let dir_path = dir_path.as_ref();
    if !dir_path.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory: {:?}", dir_path))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut items = Vec::new();
    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let file_wrapper: F = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
        items.extend(extract_vec(file_wrapper));
    }
    Ok(items)
}
