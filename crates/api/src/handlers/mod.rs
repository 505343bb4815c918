//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `cineplan_db` (and to the plan
//! generator for the generation cycle) and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod auth;
pub mod generation;
pub mod pages;
pub mod project;
