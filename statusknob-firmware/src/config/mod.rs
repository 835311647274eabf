//! Configuration loading
//!
//! Reads a TOML file from disk and validates it with the core rules, so
//! error text matches the appliance's boot screen.

pub mod loader;
pub mod parse;

pub use loader::{config_path, load, CONFIG_ENV, DEFAULT_CONFIG_PATH};
pub use parse::parse;

use std::io;
use std::path::PathBuf;

use statusknob_core::config::ConfigError;
use thiserror::Error;

/// Configuration load failure
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}
