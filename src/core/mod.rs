//! Core domain logic for topcontrib
//!
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Tally, TopContributor, Notification)
//! - `services/` - Parsing, selection and the analysis workflow
//! - `ports/` - Trait definitions for git and the output surface

pub mod models;
pub mod ports;
pub mod services;
