use std::time::Duration;

use strum::{AsRefStr, Display};

/// Toast palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// A request to show one toast.
///
/// The sink owns display and dismissal; `display_for` is the requested
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub message: String,
    pub severity: Severity,
    pub display_for: Duration,
}

impl NotificationEvent {
    pub fn new(message: impl Into<String>, severity: Severity, display_for: Duration) -> Self {
        Self {
            message: message.into(),
            severity,
            display_for,
        }
    }
}
