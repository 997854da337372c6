//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and the outside
//! world (the git executable, the terminal or editor showing results).
//!
//! Implementations live in the `adapters` module.

mod surface;
mod vcs;

pub use surface::Surface;
pub use vcs::BlameSource;
