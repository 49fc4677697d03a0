pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;

pub use errors::FolderNameError;
pub use handler::FolderSelector;
pub use traits::{FolderListener, NoopListener};
pub use types::{NameCheck, NewFolderDraft, SelectionMode};
