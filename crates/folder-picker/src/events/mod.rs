use tracing::{error, info, warn};

use crate::config::PickerConfig;
use crate::errors::PickerError;

pub fn log_selector_ready(config: &PickerConfig) {
    info!(
        event = "picker.selector.init_started",
        initial_folder_id = ?config.known_folder_id().map(|id| id.0),
        create_new_enabled = config.enable_create_new,
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Log a failed backend call.
///
/// User-caused failures (e.g. a rejected folder name) are logged as
/// warnings, everything else as errors.
pub fn log_request_error(operation: &str, error: &dyn PickerError) {
    if error.is_user_error() {
        warn!(
            event = "picker.request.call_rejected",
            operation = operation,
            error = %error,
            error_code = error.error_code(),
        );
    } else {
        error!(
            event = "picker.request.call_failed",
            operation = operation,
            error = %error,
            error_code = error.error_code(),
        );
    }
}
