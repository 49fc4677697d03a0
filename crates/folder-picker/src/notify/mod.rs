//! Application-wide alert dispatch.
//!
//! The picker announces a successful folder creation through an
//! [`AlertSink`] handed to it at construction. Delivery is fire-and-forget:
//! sinks never report failures back.

use std::fmt;
use std::sync::Mutex;

use tracing::info;

/// Title of the alert emitted after a folder is created.
pub const FOLDER_CREATED_TITLE: &str = "Folder Created";

/// Detail line of the alert emitted after a folder is created.
pub const FOLDER_CREATED_DETAIL: &str = "OK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
}

impl AlertKind {
    /// Event name hosts route the alert under.
    pub fn event_name(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub detail: String,
}

impl Alert {
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Receiver of application alerts.
pub trait AlertSink: Send + Sync {
    fn emit(&self, alert: Alert);

    fn notify_success(&self, title: &str, detail: &str) {
        self.emit(Alert::success(title, detail));
    }
}

/// Sink that only records alerts as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn emit(&self, alert: Alert) {
        info!(
            event = "picker.alert.emit_completed",
            kind = %alert.kind,
            title = alert.title,
            detail = alert.detail,
        );
    }
}

/// Sink that keeps every alert in memory, for hosts that drain alerts on
/// their own schedule.
#[derive(Debug, Default)]
pub struct BufferedAlertSink {
    alerts: Mutex<Vec<Alert>>,
}

impl BufferedAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all alerts emitted since the last drain.
    pub fn drain(&self) -> Vec<Alert> {
        match self.alerts.lock() {
            Ok(mut alerts) => std::mem::take(&mut *alerts),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl AlertSink for BufferedAlertSink {
    fn emit(&self, alert: Alert) {
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.push(alert),
            Err(poisoned) => poisoned.into_inner().push(alert),
        }
    }
}
