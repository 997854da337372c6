//! Output surface port
//!
//! The only shared state the analyzer writes to: one persistent indicator
//! and a stream of transient notifications.

use crate::core::models::Notification;

/// Where analysis results become visible
pub trait Surface: Send + Sync {
    /// Show the indicator with `text`
    fn update(&self, text: &str);

    /// Hide the indicator
    fn hide(&self);

    /// Emit a one-shot notification
    fn notify(&self, notification: Notification);
}
