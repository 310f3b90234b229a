//! Exhibit layout builder configuration.
//!
//! TOML-based configuration for the drag box: the band split, the undated
//! items width, drag styling, hover gloss colours and logging. Every section
//! uses serde defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use exhibit_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("split: {}%", config.layout.top_block_percentage);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ExhibitConfig;

use std::path::Path;

use exhibit_common::ConfigError;

/// Load config from the platform default path and validate it strictly.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<ExhibitConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it strictly.
pub fn load_config_from(path: &Path) -> Result<ExhibitConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
