use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "firerisk")]
#[command(about = "Composite climate-fire risk scoring for geographic regions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a region dataset and report the filtered results
    Score {
        /// Path to the region dataset (CSV)
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// GeoJSON boundary file to validate the geometry join against
        #[arg(long)]
        geometry: Option<PathBuf>,

        /// Feature property holding the region identity
        #[arg(long, default_value = crate::io::DEFAULT_ID_PROPERTY)]
        geometry_id_property: String,

        /// Keep only these risk categories (critical, high, moderate, low)
        #[arg(long = "category", value_delimiter = ',')]
        categories: Vec<String>,

        /// Keep only these climate trend labels
        #[arg(long = "trend", value_delimiter = ',')]
        trends: Vec<String>,

        /// Minimum region population
        #[arg(long)]
        min_population: Option<u64>,

        /// Maximum region population
        #[arg(long)]
        max_population: Option<u64>,

        /// Show only the top N regions in the ranking table
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Configuration file (defaults to discovering .firerisk.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the heat stress weight
        #[arg(long)]
        heat_weight: Option<f64>,

        /// Override the drought stress weight
        #[arg(long)]
        drought_weight: Option<f64>,

        /// Override the fire history weight
        #[arg(long)]
        fire_weight: Option<f64>,

        /// Override the WUI exposure weight
        #[arg(long)]
        wui_weight: Option<f64>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary and ranking table
    Terminal,
    /// Full report as JSON
    Json,
    /// Filtered view exported in the tabular format
    Csv,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Csv => crate::io::OutputFormat::Csv,
        }
    }
}
