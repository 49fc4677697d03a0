use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backend::FolderHit;

/// Label of the synthetic option that switches the picker into creation mode.
pub const NEW_FOLDER_LABEL: &str = "-- New Folder --";

/// Numeric value hosts use for the root folder.
pub const ROOT_VALUE: i64 = 0;

/// Numeric value hosts use for the "create new folder" option.
pub const CREATE_NEW_VALUE: i64 = -1;

/// Identifier of a real folder stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderId(pub i64);

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What selecting an option means.
///
/// Synthetic entries get their own variants so real identifiers never
/// share a numeric range with UI actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// The synthetic root folder.
    Root,
    /// The "create new folder" action.
    CreateNew,
    /// Title-only entry shown before any folder is resolved.
    Placeholder,
    /// A real folder.
    Folder(FolderId),
}

/// One entry of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderOption {
    pub text: String,
    pub kind: OptionKind,
}

impl FolderOption {
    pub fn root(root_name: impl Into<String>) -> Self {
        Self {
            text: root_name.into(),
            kind: OptionKind::Root,
        }
    }

    pub fn create_new() -> Self {
        Self {
            text: NEW_FOLDER_LABEL.to_string(),
            kind: OptionKind::CreateNew,
        }
    }

    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            text: title.into(),
            kind: OptionKind::Placeholder,
        }
    }

    pub fn folder(title: impl Into<String>, id: i64) -> Self {
        Self {
            text: title.into(),
            kind: OptionKind::Folder(FolderId(id)),
        }
    }

    /// Numeric value in the host's domain: `0` root, `-1` create-new,
    /// `None` placeholder, otherwise the folder id.
    pub fn value(&self) -> Option<i64> {
        match self.kind {
            OptionKind::Root => Some(ROOT_VALUE),
            OptionKind::CreateNew => Some(CREATE_NEW_VALUE),
            OptionKind::Placeholder => None,
            OptionKind::Folder(id) => Some(id.0),
        }
    }

    /// Returns true if selecting this option enters creation mode.
    pub fn is_create_new(&self) -> bool {
        matches!(self.kind, OptionKind::CreateNew)
    }

    /// Whether this option stands for `id`.
    pub fn matches_id(&self, id: FolderId) -> bool {
        self.kind == OptionKind::Folder(id)
    }

    /// Payload handed to the host's load/change callbacks.
    pub fn to_ref(&self) -> FolderRef {
        FolderRef {
            id: self.value(),
            title: self.text.clone(),
        }
    }
}

impl From<FolderHit> for FolderOption {
    fn from(hit: FolderHit) -> Self {
        FolderOption::folder(hit.title, hit.id)
    }
}

/// `{id, title}` pair reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: Option<i64>,
    pub title: String,
}
