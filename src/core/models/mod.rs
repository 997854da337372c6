//! Domain models for topcontrib
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Tally`] - Per-author line counts from one blame run
//! - [`TopContributor`] - The author with the most lines
//! - [`Notification`] - A transient warning or error for the user
//! - [`Severity`] - How prominently a notification is shown
//! - [`StatusIndicator`] - The persistent indicator's text and visibility

mod contributor;
mod indicator;
mod notification;
mod severity;
mod tally;

pub use contributor::TopContributor;
pub use indicator::{IndicatorState, StatusIndicator};
pub use notification::Notification;
pub use severity::Severity;
pub use tally::{AuthorLines, Tally};
