//! Default values for picker configuration.

/// Label class applied when the host does not set one.
pub fn default_label_class() -> String {
    "width-7".to_string()
}

/// Display name of the synthetic root folder.
pub fn default_root_name() -> String {
    "Root".to_string()
}
