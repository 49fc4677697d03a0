//! # Picker Configuration
//!
//! The attributes a host binds on a folder picker: preselection, labels and
//! whether inline folder creation is offered.
//!
//! ```rust,no_run
//! use folder_picker::config::PickerConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PickerConfig::load_file(std::path::Path::new("picker.toml"))?;
//!     let preselected = config.known_folder_id();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::{from_toml_str, load_config_file, validate_config};
pub use types::{PickerConfig, parse_flag};

use crate::errors::ConfigError;

impl PickerConfig {
    /// Load configuration from a TOML file.
    ///
    /// See [`loading::load_config_file`] for details.
    pub fn load_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        loading::load_config_file(path)
    }
}
