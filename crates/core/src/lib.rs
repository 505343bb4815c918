//! Domain types shared across the Cineplan workspace.
//!
//! Holds the plan model produced by the generation cycle, the project type
//! enumeration, and the common error/id/timestamp types every other crate
//! builds on.

pub mod error;
pub mod plan;
pub mod project_type;
pub mod types;
