use crate::config::CONFIG_FILE_NAME;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Firerisk Configuration

# Multipliers applied to the bounded sub-scores when forming the
# composite risk score. Each must be a non-negative number.
[weights]
heat_weight = 1.0
drought_weight = 1.0
fire_weight = 1.0
wui_weight = 1.0

# Category cut points on the 0-100 composite scale. A score equal to a
# cut point belongs to the higher category.
[thresholds]
critical = 70.0
high = 55.0
moderate = 40.0
"#;

    fs::write(&config_path, default_config)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
