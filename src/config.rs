//! Configuration System
//!
//! Layered configuration built with the `config` crate: defaults, the global
//! config file, an explicit `--config` file, then `TFC_*` environment
//! variables. The API token is deliberately not part of it (see [`crate::auth`]).

use crate::error::TfcError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use merge::builder_with_defaults;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfcConfig {
    /// Terraform Cloud / Enterprise address, without the `/api/v2` suffix
    #[serde(default = "default_address")]
    pub address: String,

    /// Default organization when `--org` / `TFC_ORG` is not given
    #[serde(default)]
    pub organization: Option<String>,

    /// Default `page[size]` for list commands
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Disable colored table headers
    #[serde(default)]
    pub no_color: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_address() -> String {
    merge::DEFAULT_ADDRESS.to_string()
}

fn default_page_size() -> u32 {
    merge::DEFAULT_PAGE_SIZE as u32
}

impl Default for TfcConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            organization: None,
            page_size: default_page_size(),
            no_color: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl TfcConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TfcError> {
        if self.address.trim().is_empty() {
            return Err(TfcError::Config("address cannot be empty".to_string()));
        }
        if !(1..=100).contains(&self.page_size) {
            return Err(TfcError::Config(format!(
                "page_size must be between 1 and 100, got {}",
                self.page_size
            )));
        }
        Ok(())
    }

    /// Address with trailing slashes removed.
    pub fn normalized_address(&self) -> &str {
        self.address.trim_end_matches('/')
    }
}

/// Loads [`TfcConfig`] from all sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, the global file, and the environment.
    pub fn load() -> Result<TfcConfig, TfcError> {
        Self::load_with(None)
    }

    /// Load with an explicit config file layered over the global one.
    pub fn load_from_file(path: &Path) -> Result<TfcConfig, TfcError> {
        Self::load_with(Some(path))
    }

    fn load_with(explicit: Option<&Path>) -> Result<TfcConfig, TfcError> {
        let mut builder = builder_with_defaults()?;
        builder = sources::global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = sources::explicit_file::add_to_builder(builder, path)?;
        }
        builder = sources::env::add_to_builder(builder);

        let config: TfcConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
