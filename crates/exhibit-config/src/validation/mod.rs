//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod gloss;
mod helpers;
mod layout;

#[cfg(test)]
mod tests;

use crate::schema::ExhibitConfig;
use exhibit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ExhibitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    layout::validate_drag(&mut errors, config);
    gloss::validate_gloss(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
