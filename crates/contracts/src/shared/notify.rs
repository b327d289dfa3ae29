use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A user-visible ephemeral message handed to the notification sink.
/// Fire-and-forget: the sender does not wait for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: &str, message: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        }
    }

    pub fn info(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Info)
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Success)
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Error)
    }
}
