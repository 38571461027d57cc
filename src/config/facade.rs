//! Config loading facade: builds the layered configuration and validates it.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file};
use super::AppConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: defaults, global file, environment.
    pub fn load() -> Result<AppConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;
        Self::finish(builder.build()?)
    }

    /// Load configuration from an explicit file. Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;
        Self::finish(builder.build()?)
    }

    /// Load from `path` when given, otherwise from the default layers.
    pub fn load_with_override(path: Option<&Path>) -> Result<AppConfig, ApiError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Self::load(),
        }
    }

    fn finish(raw: config::Config) -> Result<AppConfig, ApiError> {
        let config: AppConfig = raw.try_deserialize()?;
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
