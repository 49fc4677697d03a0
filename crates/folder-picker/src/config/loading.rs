//! Configuration loading and validation.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::ConfigError;

use super::types::PickerConfig;

/// Parse and validate a configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<PickerConfig, ConfigError> {
    let config: PickerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load a configuration file from the given path.
///
/// # Errors
///
/// Returns [`ConfigError::ConfigNotFound`] if the file does not exist, and
/// parse or validation errors otherwise.
pub fn load_config_file(path: &Path) -> Result<PickerConfig, ConfigError> {
    debug!(event = "picker.config.load_started", path = %path.display());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    from_toml_str(&content).inspect_err(|e| {
        warn!(
            event = "picker.config.load_failed",
            path = %path.display(),
            error = %e,
        );
    })
}

/// Reject configurations the picker cannot render.
pub fn validate_config(config: &PickerConfig) -> Result<(), ConfigError> {
    if config.root_name.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "root_name cannot be empty".to_string(),
        });
    }
    Ok(())
}
