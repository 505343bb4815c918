//! Session cookie construction and parsing.
//!
//! The session credential travels as a single HttpOnly cookie. The guard
//! reads it on every request and, when the token is due for refresh,
//! rewrites it on the response.

use axum::http::HeaderMap;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "film_session";

/// Build the Set-Cookie value carrying a session token.
pub fn build_session_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    )
}

/// Build the Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extract the session token from the request's `Cookie` header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}
