//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{AuthorLines, IndicatorState, Notification, Severity, TopContributor};
use crate::core::services::Run;
use crate::error::AnalysisError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Print a notification to stderr with a colored severity label
pub fn print_notification(notification: &Notification) {
    let label = match notification.severity {
        Severity::Warning => "warning:".yellow().bold(),
        Severity::Error => "error:".red().bold(),
    };
    eprintln!("{label} {}", notification.message);
}

/// Failure details for JSON output
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    /// Machine-readable kind (`not_a_repository`, `execution_error`, ...)
    pub kind: String,
    /// Notification severity
    pub severity: Severity,
    /// Untranslated description
    pub detail: String,
}

impl From<&AnalysisError> for ErrorInfo {
    fn from(err: &AnalysisError) -> Self {
        Self {
            kind: err.kind().to_string(),
            severity: err.severity(),
            detail: err.to_string(),
        }
    }
}

/// Result of a one-shot `show`
#[derive(Debug, Serialize)]
pub struct ShowResult {
    /// File that was analyzed (as handed to git)
    pub file: String,
    /// Indicator text, when shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// Top contributor, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<TopContributor>,
    /// Every author, most lines first
    pub contributors: Vec<AuthorLines>,
    /// Lines attributed in total
    pub total_lines: usize,
    /// Failure details, if the run failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    /// Notifications the run produced
    pub notifications: Vec<Notification>,
}

impl ShowResult {
    /// Assemble from a finished run and what the surface recorded
    #[must_use]
    pub fn new(
        file: String,
        run: &Run,
        indicator: &IndicatorState,
        notifications: Vec<Notification>,
    ) -> Self {
        let (top, contributors, total_lines, error) = match &run.result {
            Ok(report) => (
                Some(report.top.clone()),
                report.tally.ranked(),
                report.tally.total_lines(),
                None,
            ),
            Err(e) => (None, Vec::new(), 0, Some(ErrorInfo::from(e))),
        };

        Self {
            file,
            indicator: indicator.visible.then(|| indicator.text.clone()),
            top,
            contributors,
            total_lines,
            error,
            notifications,
        }
    }

    /// Result for when no file was given
    #[must_use]
    pub fn no_file(notifications: Vec<Notification>) -> Self {
        Self {
            file: String::new(),
            indicator: None,
            top: None,
            contributors: Vec::new(),
            total_lines: 0,
            error: Some(ErrorInfo {
                kind: "no_file_open".to_string(),
                severity: Severity::Error,
                detail: "no file open".to_string(),
            }),
            notifications,
        }
    }

    /// Whether the indicator ended up visible
    #[must_use]
    pub const fn displayed(&self) -> bool {
        self.indicator.is_some()
    }

    /// Render the result based on output mode.
    /// `all` lists every contributor below the indicator in human mode.
    pub fn render(&self, mode: OutputMode, all: bool) {
        match mode {
            OutputMode::Human => self.render_human(all),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, all: bool) {
        for notification in &self.notifications {
            print_notification(notification);
        }

        if let Some(text) = &self.indicator {
            println!("{text}");
        }

        if all && !self.contributors.is_empty() {
            let width = self
                .contributors
                .iter()
                .map(|c| c.author.len())
                .fold("total".len(), usize::max);
            for entry in &self.contributors {
                println!("  {:<width$}  {:>6}", entry.author, entry.lines);
            }
            println!("  {:<width$}  {:>6}", "total", self.total_lines);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Effective configuration, as printed by `topcontrib config`
#[derive(Debug, Serialize)]
pub struct ConfigResult {
    /// Config file location
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
    /// Resolved locale code
    pub locale: String,
    /// Git executable
    pub git: String,
    /// Resolved path style (`native` or `wsl`)
    pub path_style: String,
}

impl ConfigResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let suffix = if self.exists { "" } else { " (not found, using defaults)" };
                println!("Config:     {}{suffix}", self.path);
                println!("Locale:     {}", self.locale);
                println!("Git:        {}", self.git);
                println!("Path style: {}", self.path_style);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
