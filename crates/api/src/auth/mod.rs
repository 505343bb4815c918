//! Session-token and password primitives.
//!
//! - [`jwt`] -- HS256 session tokens carried in the session cookie.
//! - [`password`] -- Argon2id hashing and verification.
//! - [`cookie`] -- session cookie construction and parsing.

pub mod cookie;
pub mod jwt;
pub mod password;
