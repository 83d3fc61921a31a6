//! TOML configuration loading.
//!
//! ```toml
//! [limits.age]
//! min = 25
//! max = 74
//!
//! [rate_table]
//! unit = 100000
//! fallback_rate = 1800
//! brackets = [
//!   { max_age = 60, rate = 790 },
//!   { max_age = 65, rate = 1390 },
//!   { max_age = 70, rate = 1680 },
//! ]
//!
//! [display]
//! live_grouping = true
//! currency_label = "baht"
//! ```
//!
//! Any section may be left out; omitted values use the built-in defaults.

use std::path::{Path, PathBuf};

use premium_core::{ConfigError, EstimatorConfig};
use tracing::{debug, info};

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parses and validates configuration text.
pub fn load_from_str(input: &str) -> Result<EstimatorConfig, ConfigLoadError> {
    let config: EstimatorConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<EstimatorConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_from_str(&contents)?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Loads `path` when given, otherwise returns the defaults.
pub fn load(path: Option<&Path>) -> Result<EstimatorConfig, ConfigLoadError> {
    match path {
        Some(path) => load_from_file(path),
        None => {
            debug!("no config file given; using defaults");
            Ok(EstimatorConfig::default())
        }
    }
}
