//! Configuration discovery and loading.
//!
//! `.firerisk.toml` is looked up by walking up the directory hierarchy from
//! the current directory. A discovered file with invalid weights or
//! thresholds degrades to defaults with a warning; an explicitly requested
//! file (`--config`) fails hard instead.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::FireriskConfig;
use crate::errors::FireriskError;

pub const CONFIG_FILE_NAME: &str = ".firerisk.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and validate weights and thresholds.
pub fn parse_and_validate_config(contents: &str) -> Result<FireriskConfig, String> {
    let config = toml::from_str::<FireriskConfig>(contents)
        .map_err(|e| format!("failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config.weights.validate()?;
    config.thresholds.validate()?;

    Ok(config)
}

/// Try loading config from a specific path; invalid content degrades to
/// `None` with a warning rather than halting discovery.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FireriskConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Invalid config {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit.
pub(crate) fn directory_ancestors(
    start: PathBuf,
    max_depth: usize,
) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover and load `.firerisk.toml` from the current directory or one of
/// its ancestors, falling back to defaults when nothing valid is found.
pub fn load_config() -> FireriskConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return FireriskConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FireriskConfig::default()
        })
}

/// Load an explicitly requested config file. Unlike discovery, every
/// failure here is a hard error.
pub fn load_config_from(path: &Path) -> Result<FireriskConfig, FireriskError> {
    let contents = read_config_file(path).map_err(|source| FireriskError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_and_validate_config(&contents).map_err(FireriskError::Config)
}
