//! Transient user notifications

use serde::Serialize;

use super::Severity;

/// A one-shot message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// How prominently to show it
    pub severity: Severity,
    /// Localized message text
    pub message: String,
}

impl Notification {
    /// Create a warning notification
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create an error notification
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
