use crate::errors::PickerError;

/// Failure of a call to the search / folder-creation backend.
///
/// The picker never interprets the payload of a failed request; the
/// message is carried only so the host can surface it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("Backend responded with status {status}: {message}")]
    Backend { status: u16, message: String },
}

impl PickerError for RequestError {
    fn error_code(&self) -> &'static str {
        match self {
            RequestError::Transport { .. } => "REQUEST_TRANSPORT_FAILED",
            RequestError::Backend { .. } => "REQUEST_BACKEND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            RequestError::Backend { status, .. } => (400..500).contains(status),
            RequestError::Transport { .. } => false,
        }
    }
}
