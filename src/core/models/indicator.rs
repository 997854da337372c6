//! Persistent status indicator

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// What the indicator currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorState {
    /// Last text set with [`StatusIndicator::update`]
    pub text: String,
    /// Whether the indicator is shown
    pub visible: bool,
}

/// Owner of the indicator's text and visibility.
///
/// Created once and shared by handle; safe to update from concurrent runs.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    state: Mutex<IndicatorState>,
}

impl StatusIndicator {
    /// Create a hidden, empty indicator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text and show the indicator. Returns whether anything changed.
    pub fn update(&self, text: &str) -> bool {
        let mut state = self.lock();
        let changed = !state.visible || state.text != text;
        text.clone_into(&mut state.text);
        state.visible = true;
        changed
    }

    /// Hide the indicator, keeping its last text. Returns whether it was visible.
    pub fn hide(&self) -> bool {
        let mut state = self.lock();
        std::mem::replace(&mut state.visible, false)
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> IndicatorState {
        self.lock().clone()
    }

    /// Whether the indicator is shown
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    fn lock(&self) -> MutexGuard<'_, IndicatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
