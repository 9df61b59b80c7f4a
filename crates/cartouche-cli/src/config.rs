//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files, either
//! from an explicit path or from the local project directory.

use std::{fs, path::Path};

use log::{debug, info};

use cartouche::{Error, config::Defaults};

/// Find and load configuration
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (cartouche/config.toml)
/// 3. Default config if none found
///
/// # Errors
///
/// Returns an error if an explicit path is provided but the file does not
/// exist, or if a config file exists but cannot be parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<Defaults, Error> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:% = path.display(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("cartouche/config.toml");
    if local_config.exists() {
        info!(path:% = local_config.display(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    debug!("No configuration file found, using default configuration");
    Ok(Defaults::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<Defaults, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|err| Error::Document(err.to_string()))
}
