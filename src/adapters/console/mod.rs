//! Terminal output surface
//!
//! Renders the indicator and notifications for an interactive session.
//! Human mode prints the indicator to stdout whenever it changes and
//! notifications to stderr. JSON mode prints one object per event to stdout.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::json;

use crate::core::models::{Notification, StatusIndicator};
use crate::core::ports::Surface;
use crate::output::{self, OutputMode};

/// Surface writing to the terminal
#[derive(Debug, Default)]
pub struct TerminalSurface {
    indicator: StatusIndicator,
    mode: OutputMode,
}

impl TerminalSurface {
    /// Create a surface rendering in `mode`
    #[must_use]
    pub fn new(mode: OutputMode) -> Self {
        Self {
            indicator: StatusIndicator::new(),
            mode,
        }
    }

    /// The indicator this surface renders
    #[must_use]
    pub const fn indicator(&self) -> &StatusIndicator {
        &self.indicator
    }

    fn emit_indicator(&self) {
        let state = self.indicator.snapshot();
        match self.mode {
            OutputMode::Human if state.visible => println!("{}", state.text),
            OutputMode::Human => println!("{}", "(hidden)".dimmed()),
            OutputMode::Json => println!(
                "{}",
                json!({ "event": "indicator", "visible": state.visible, "text": state.text })
            ),
        }
        // Editors read the indicator line by line.
        let _ = io::stdout().flush();
    }
}

impl Surface for TerminalSurface {
    fn update(&self, text: &str) {
        if self.indicator.update(text) {
            self.emit_indicator();
        }
    }

    fn hide(&self) {
        if self.indicator.hide() {
            self.emit_indicator();
        }
    }

    fn notify(&self, notification: Notification) {
        match self.mode {
            OutputMode::Human => output::print_notification(&notification),
            OutputMode::Json => {
                println!(
                    "{}",
                    json!({
                        "event": "notification",
                        "severity": notification.severity,
                        "message": notification.message,
                    })
                );
                let _ = io::stdout().flush();
            },
        }
    }
}
