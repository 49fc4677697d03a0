//! Host callback trait.

use std::sync::Arc;

use crate::options::FolderRef;

/// Callbacks a host registers to follow the picker.
///
/// Every method defaults to doing nothing.
pub trait FolderListener: Send + Sync {
    /// Fired once the initial folder has been resolved.
    fn on_load(&self, _folder: &FolderRef) {}

    /// Fired on every confirmed selection, including a freshly created folder.
    fn on_change(&self, _folder: &FolderRef) {}

    /// Fired when entering (`false`) or leaving (`true`) creation mode.
    fn on_validity_changed(&self, _is_valid_selection: bool) {}
}

/// Listener that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl FolderListener for NoopListener {}

impl<T: FolderListener + ?Sized> FolderListener for Arc<T> {
    fn on_load(&self, folder: &FolderRef) {
        (**self).on_load(folder)
    }

    fn on_change(&self, folder: &FolderRef) {
        (**self).on_change(folder)
    }

    fn on_validity_changed(&self, is_valid_selection: bool) {
        (**self).on_validity_changed(is_valid_selection)
    }
}
