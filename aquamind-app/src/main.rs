use anyhow::Result;
use aquamind_core::history::TimeRange;
use aquamind_schemas::{catalog::Language, maintenance::VolumeUnit, parameter::MainType};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod workflow;

#[derive(Parser)]
#[command(name = "aquamind", version, about = "Aquarium water-quality status from the command line")]
struct Cli {
    /// Language for summaries and advice (es, en or a locale such as en-US)
    #[arg(long, global = true, default_value = "es")]
    lang: Language,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every aquarium against its latest readings
    Evaluate {
        #[arg(long)]
        aquariums: PathBuf,
        #[arg(long)]
        readings: PathBuf,
        /// Directory with `ranges/` and `recommendations/` YAML overrides
        #[arg(long)]
        catalog: Option<String>,
        /// Append one CSV row per evaluation to this file
        #[arg(long)]
        log: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the reference ranges of a sub-type
    Ranges {
        #[arg(long)]
        sub_type: String,
    },
    /// List the catalogued sub-types
    SubTypes {
        #[arg(long)]
        main_type: Option<MainType>,
    },
    /// Estimate the nutrient reduction of a water change
    WaterChange {
        #[arg(long)]
        aquariums: PathBuf,
        #[arg(long)]
        readings: PathBuf,
        #[arg(long)]
        aquarium: String,
        #[arg(long)]
        volume: f64,
        #[arg(long, value_enum, default_value_t = Units::Liters)]
        units: Units,
    },
    /// Show the reading history of an aquarium
    History {
        #[arg(long)]
        readings: PathBuf,
        #[arg(long)]
        aquarium: String,
        /// week, month, 4m, 6m, year or all
        #[arg(long, default_value = "month")]
        range: TimeRange,
    },
    /// Totals across all aquariums
    Summary {
        #[arg(long)]
        aquariums: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Units {
    Liters,
    Gallons,
}

impl From<Units> for VolumeUnit {
    fn from(units: Units) -> Self {
        match units {
            Units::Liters => VolumeUnit::Liters,
            Units::Gallons => VolumeUnit::Gallons,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { aquariums, readings, catalog, log, json } => {
            workflow::run_evaluation(workflow::EvaluateOptions {
                aquariums: &aquariums,
                readings: &readings,
                catalog_dir: catalog.as_deref(),
                language: cli.lang,
                log_path: log.as_deref(),
                json,
            })
        }
        Commands::Ranges { sub_type } => workflow::run_ranges(&sub_type, cli.lang),
        Commands::SubTypes { main_type } => workflow::run_sub_types(main_type),
        Commands::WaterChange { aquariums, readings, aquarium, volume, units } => {
            workflow::run_water_change(workflow::WaterChangeOptions {
                aquariums: &aquariums,
                readings: &readings,
                aquarium_id: &aquarium,
                volume,
                units: units.into(),
                language: cli.lang,
            })
        }
        Commands::History { readings, aquarium, range } => {
            workflow::run_history(&readings, &aquarium, range)
        }
        Commands::Summary { aquariums } => workflow::run_summary(&aquariums),
    }
}
