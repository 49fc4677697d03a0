//! Quiet-period debouncing for text input.
//!
//! The new-folder name field only triggers a collision search once typing
//! has paused for [`NAME_INPUT_DEBOUNCE`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::trace;

/// Quiet period before a new-folder name is checked against the backend.
pub const NAME_INPUT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Drops every input that is followed by another one within the quiet period.
///
/// Clones share the same generation counter, so one debouncer can be handed
/// to each input event task.
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    quiet: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::new(NAME_INPUT_DEBOUNCE)
    }
}

impl InputDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Wait out the quiet period and return `value` if it is still the
    /// latest input, or `None` if a newer input superseded it.
    pub async fn settle<T>(&self, value: T) -> Option<T> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(value)
        } else {
            trace!(event = "picker.debounce.input_superseded", ticket = ticket);
            None
        }
    }
}
