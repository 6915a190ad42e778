//! Configuration for the minigraph engine and its command line driver.
//!
//! The configuration is read from a TOML file. Every section is optional and
//! falls back to its default, so an empty file is a valid configuration.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod dataset;
mod engine;
mod log;

use std::path::{Path, PathBuf};

pub use dataset::DatasetConfig;
pub use engine::{EngineConfig, ErrorMode};
pub use log::{LogConfig, LogLevel, LogStyle};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Root of the `minigraph.toml` configuration file.
pub struct Config {
    /// Request execution settings
    pub engine: EngineConfig,
    /// Where the entity store is seeded from
    pub dataset: DatasetConfig,
    /// Default logging settings, overridable from the command line
    pub log: LogConfig,
}

impl Config {
    /// Loads the configuration at `path`.
    ///
    /// A missing file is not an error and yields `None`, so callers can fall back
    /// to [`Config::default`].
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Config>, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // dataset paths are relative to the configuration file
        if let (Some(dataset_path), Some(parent)) = (config.dataset.path.as_mut(), path.parent()) {
            if dataset_path.is_relative() {
                *dataset_path = parent.join(&*dataset_path);
            }
        }

        Ok(Some(config))
    }
}
