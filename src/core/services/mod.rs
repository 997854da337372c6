//! Business logic services
//!
//! - [`parser`] - Turn raw blame output into a tally
//! - [`selector`] - Pick the top contributor from a tally
//! - [`analyzer`] - Run the whole workflow against the ports

pub mod analyzer;
pub mod parser;
pub mod selector;

pub use analyzer::{Analyzer, Report, Run};
pub use parser::{author_of, parse_blame};
pub use selector::top_contributor;
