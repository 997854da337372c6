//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - `BlameSource` backed by the git executable
//! - `console/` - `Surface` rendering to the terminal
//! - `memory/` - `Surface` recording into memory

pub mod console;
pub mod git;
pub mod memory;

pub use console::TerminalSurface;
pub use git::GitCli;
pub use memory::RecordingSurface;
