//! Entity models and request/response DTOs.

pub mod project;
pub mod user;
