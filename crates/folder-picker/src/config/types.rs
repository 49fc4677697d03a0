//! Configuration type definitions for the folder picker.
//!
//! These mirror the attributes a host binds on the widget. They can be
//! built in code or deserialized from TOML.
//!
//! # Example Configuration
//!
//! ```toml
//! initial_title = "Imported dashboards"
//! initial_folder_id = 12
//! label_class = "width-9"
//! root_name = "General"
//! enable_create_new = "true"
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::options::FolderId;

/// Widget-level configuration of a folder picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickerConfig {
    /// Display text while no folder id is known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_title: Option<String>,

    /// Folder to preselect. Values <= 0 count as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_folder_id: Option<i64>,

    /// Visual sizing class for the label. Not interpreted by the picker.
    #[serde(default = "super::defaults::default_label_class")]
    pub label_class: String,

    /// Display label of the synthetic root option.
    #[serde(default = "super::defaults::default_root_name")]
    pub root_name: String,

    /// Whether the "create new folder" option is offered.
    ///
    /// Accepts a boolean or a boolean-as-string (`"true"`, `"false"`,
    /// `"1"`, `"0"`, `""`). Unlike plain string truthiness, `"false"`
    /// disables creation and unrecognized strings are rejected.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub enable_create_new: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_title: None,
            initial_folder_id: None,
            label_class: super::defaults::default_label_class(),
            root_name: super::defaults::default_root_name(),
            enable_create_new: false,
        }
    }
}

impl PickerConfig {
    /// The preselected folder id, if it names a real folder.
    pub fn known_folder_id(&self) -> Option<FolderId> {
        self.initial_folder_id.filter(|&id| id > 0).map(FolderId)
    }

    /// The initial title, if one was given and is non-empty.
    pub fn initial_title(&self) -> Option<&str> {
        self.initial_title.as_deref().filter(|t| !t.is_empty())
    }

    pub fn with_initial_folder_id(mut self, id: i64) -> Self {
        self.initial_folder_id = Some(id);
        self
    }

    pub fn with_initial_title(mut self, title: impl Into<String>) -> Self {
        self.initial_title = Some(title.into());
        self
    }

    pub fn with_root_name(mut self, root_name: impl Into<String>) -> Self {
        self.root_name = root_name.into();
        self
    }

    pub fn with_create_new(mut self, enabled: bool) -> Self {
        self.enable_create_new = enabled;
        self
    }
}

/// Parse a boolean-as-string attribute value.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" | "" => Some(false),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(value) => Ok(value),
        FlagValue::Text(text) => parse_flag(&text).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid boolean '{}' (expected true, false, 1 or 0)",
                text
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.label_class, "width-7");
        assert_eq!(config.root_name, "Root");
        assert!(!config.enable_create_new);
        assert_eq!(config.known_folder_id(), None);
        assert_eq!(config.initial_title(), None);
    }

    #[test]
    fn test_non_positive_folder_id_is_absent() {
        assert_eq!(
            PickerConfig::default()
                .with_initial_folder_id(0)
                .known_folder_id(),
            None
        );
        assert_eq!(
            PickerConfig::default()
                .with_initial_folder_id(-3)
                .known_folder_id(),
            None
        );
        assert_eq!(
            PickerConfig::default()
                .with_initial_folder_id(5)
                .known_folder_id(),
            Some(FolderId(5))
        );
    }

    #[test]
    fn test_empty_initial_title_is_absent() {
        let config = PickerConfig::default().with_initial_title("");
        assert_eq!(config.initial_title(), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("yes please"), None);
    }

    #[test]
    fn test_flag_accepts_bool_and_string() {
        let from_bool: PickerConfig = toml::from_str("enable_create_new = true").unwrap();
        assert!(from_bool.enable_create_new);

        let from_text: PickerConfig = toml::from_str(r#"enable_create_new = "true""#).unwrap();
        assert!(from_text.enable_create_new);

        let disabled: PickerConfig = toml::from_str(r#"enable_create_new = "false""#).unwrap();
        assert!(!disabled.enable_create_new);
    }

    #[test]
    fn test_flag_rejects_garbage() {
        let result: Result<PickerConfig, _> = toml::from_str(r#"enable_create_new = "maybe""#);
        assert!(result.is_err());
    }
}
