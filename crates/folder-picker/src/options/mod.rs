pub mod handler;
pub mod types;

pub use handler::{build_options, is_root_query, list_options};
pub use types::{FolderId, FolderOption, FolderRef, NEW_FOLDER_LABEL, OptionKind};
