//! Session triggers
//!
//! One event per input line:
//!
//! ```text
//! focus <path>    active file changed (alias: open)
//! blur            no active file (alias: close)
//! save <path>     a document was saved
//! show            explicit command for the active file
//! quit            stop the session (alias: exit)
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Inbound event from the editor host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The show-contributors command was invoked
    Command,
    /// The active file changed
    Focus(PathBuf),
    /// No file is active any more
    Blur,
    /// A document was saved
    Saved(PathBuf),
    /// End the session
    Quit,
}

/// Why an input line is not a trigger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// Blank line
    #[error("empty line")]
    Empty,
    /// Event needs a path argument
    #[error("'{0}' requires a path")]
    MissingPath(String),
    /// Unrecognized event name
    #[error("unknown event '{0}'")]
    Unknown(String),
}

impl Trigger {
    /// Parse one input line. Everything after the event name is the path,
    /// so paths may contain spaces.
    pub fn parse(line: &str) -> Result<Self, TriggerError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(TriggerError::Empty);
        }

        let (event, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let path = || {
            let rest = rest.trim();
            if rest.is_empty() {
                Err(TriggerError::MissingPath(event.to_string()))
            } else {
                Ok(PathBuf::from(rest))
            }
        };

        match event {
            "focus" | "open" => Ok(Self::Focus(path()?)),
            "save" => Ok(Self::Saved(path()?)),
            "blur" | "close" => Ok(Self::Blur),
            "show" => Ok(Self::Command),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(TriggerError::Unknown(other.to_string())),
        }
    }
}
