//! In-memory output surface
//!
//! Keeps the indicator and every notification for later inspection. Used by
//! the one-shot `show` command, which renders the outcome itself, and by
//! tests.

use std::sync::{Mutex, PoisonError};

use crate::core::models::{IndicatorState, Notification, StatusIndicator};
use crate::core::ports::Surface;

/// Surface that records instead of rendering
#[derive(Debug, Default)]
pub struct RecordingSurface {
    indicator: StatusIndicator,
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSurface {
    /// Create an empty recording surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current indicator state
    #[must_use]
    pub fn indicator(&self) -> IndicatorState {
        self.indicator.snapshot()
    }

    /// Notifications emitted so far, oldest first
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Surface for RecordingSurface {
    fn update(&self, text: &str) {
        self.indicator.update(text);
    }

    fn hide(&self) {
        self.indicator.hide();
    }

    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
