//! folder-picker: headless folder selection with inline folder creation
//!
//! Holds the state of a folder picker widget: a searchable dropdown of
//! existing folders (plus the root) and an inline field for creating a new
//! folder. Rendering is left to the host UI; searches and folder creation go
//! through a [`FolderBackend`].
//!
//! # Main Entry Points
//!
//! - [`selector`] - The picker state machine ([`FolderSelector`])
//! - [`options`] - Dropdown option building
//! - [`backend`] - Backend trait and wire types
//! - [`notify`] - Alert sinks
//! - [`config`] - Widget configuration
//! - [`debounce`] - Input debouncing for the new-folder field

pub mod backend;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod events;
pub mod logging;
pub mod notify;
pub mod options;
pub mod selector;

// Re-export commonly used types at crate root for convenience
pub use backend::{CreatedDashboard, FolderBackend, FolderHit, RequestError, SearchQuery};
pub use config::PickerConfig;
pub use debounce::{InputDebouncer, NAME_INPUT_DEBOUNCE};
pub use errors::{ConfigError, PickerError, PickerResult};
pub use notify::{Alert, AlertKind, AlertSink, BufferedAlertSink, LogAlertSink};
pub use options::{FolderId, FolderOption, FolderRef, OptionKind};
pub use selector::{
    FolderListener, FolderNameError, FolderSelector, NameCheck, NewFolderDraft, NoopListener,
    SelectionMode,
};

// Re-export logging initialization
pub use logging::init_logging;
