use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::{Config, ConfigOverrides};
use crate::config::validation;
use crate::utils::error::{MdtocError, Result};

/// Configuration file names to look for, first found wins
const CONFIG_FILES: [&str; 3] = [".mdtoc.yml", ".mdtoc.yaml", ".mdtoc.toml"];

/// Load options from defaults, an optional config file and overrides.
///
/// An explicit `config_file` must exist. Otherwise `search_dir` is searched
/// for one of the default file names and defaults are used if none is there.
pub fn load_config<P: AsRef<Path>>(
    search_dir: P,
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<Config> {
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(&search_dir),
    };

    let mut config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            read_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.merge(overrides);
    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the default configuration file in a directory
pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file based on its extension
fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MdtocError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        ))
    })?;

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, path),
        // Assume YAML for anything else, including `.mdtoc.yml`
        _ => parse_yaml_config(&content, path),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<Config> {
    // An empty YAML document is null, not an empty mapping
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        MdtocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| {
        MdtocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        ))
    })
}
