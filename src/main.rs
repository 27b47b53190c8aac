use anyhow::Result;
use clap::Parser;
use firerisk::cli::{Cli, Commands};
use firerisk::commands::{handle_score, init_config, ScoreConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            path,
            format,
            output,
            geometry,
            geometry_id_property,
            categories,
            trends,
            min_population,
            max_population,
            top,
            config,
            heat_weight,
            drought_weight,
            fire_weight,
            wui_weight,
        } => handle_score(ScoreConfig {
            path,
            format: format.into(),
            output,
            geometry,
            geometry_id_property,
            categories,
            trends,
            min_population,
            max_population,
            top,
            config_path: config,
            heat_weight,
            drought_weight,
            fire_weight,
            wui_weight,
        }),
        Commands::Init { force } => init_config(force),
    }
}
