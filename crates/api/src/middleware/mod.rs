//! Per-request identity resolution.
//!
//! - [`guard::session_guard`] -- resolves the caller from the session cookie
//!   and applies the login/dashboard redirect policy.
//! - [`auth::CurrentUser`] -- extractor for handlers that require identity.

pub mod auth;
pub mod guard;
