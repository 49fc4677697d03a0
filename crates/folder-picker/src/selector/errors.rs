use crate::errors::PickerError;

/// Why the name typed for a new folder cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FolderNameError {
    #[error("A Folder should have a name")]
    Empty,

    #[error("A Folder or Dashboard with the same name already exists")]
    AlreadyExists,
}

impl PickerError for FolderNameError {
    fn error_code(&self) -> &'static str {
        match self {
            FolderNameError::Empty => "FOLDER_NAME_EMPTY",
            FolderNameError::AlreadyExists => "FOLDER_NAME_EXISTS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
