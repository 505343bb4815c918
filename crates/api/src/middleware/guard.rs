//! Session guard: per-request identity resolution and redirect policy.
//!
//! Runs on every route. Resolves the caller from the session cookie, then
//! applies the two-state redirect policy:
//!
//! - unauthenticated, off the login surface -> redirect to `/login`
//! - authenticated, on the login page       -> redirect to `/dashboard`
//! - otherwise                              -> pass through
//!
//! The guard fails open: when the identity layer is unconfigured (no JWT
//! secret) every request passes through unauthenticated. An invalid or
//! expired cookie is simply treated as "no identity", never as a hard error.

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::cookie::{build_session_cookie, session_token};
use crate::auth::jwt::{should_refresh, validate_session_token, Claims};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Path of the authenticated dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of the guard's decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    PassThrough,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Decide what to do with a request given its authentication state and path.
///
/// The login surface (`/login` and everything under `/auth`) and the health
/// endpoint are reachable without identity; everything else redirects
/// unauthenticated callers to the login page.
pub fn classify(authenticated: bool, path: &str) -> GuardAction {
    let on_login_surface = path == LOGIN_PATH || path.starts_with("/auth");

    if !authenticated && !on_login_surface && path != "/health" {
        return GuardAction::RedirectToLogin;
    }
    if authenticated && path == LOGIN_PATH {
        return GuardAction::RedirectToDashboard;
    }
    GuardAction::PassThrough
}

/// Axum middleware applying the session-guard policy to every request.
pub async fn session_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Fail open: identity layer unconfigured means no checks at all.
    let Some(jwt_config) = state.config.auth.as_ref() else {
        return next.run(request).await;
    };

    let claims: Option<Claims> = session_token(request.headers())
        .and_then(|token| validate_session_token(&token, jwt_config).ok());

    match classify(claims.is_some(), request.uri().path()) {
        GuardAction::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        GuardAction::RedirectToDashboard => Redirect::to(DASHBOARD_PATH).into_response(),
        GuardAction::PassThrough => {
            let refresh = match &claims {
                Some(claims) => {
                    request.extensions_mut().insert(CurrentUser {
                        user_id: claims.sub,
                        email: claims.email.clone(),
                    });
                    should_refresh(claims).then(|| claims.clone())
                }
                None => None,
            };

            let mut response = next.run(request).await;

            // Sliding session: re-issue the cookie once the token has
            // passed half its lifetime.
            if let Some(claims) = refresh {
                if let Ok(token) =
                    crate::auth::jwt::generate_session_token(claims.sub, &claims.email, jwt_config)
                {
                    let cookie = build_session_cookie(&token, jwt_config.session_expiry_secs());
                    if let Ok(value) = cookie.parse() {
                        response.headers_mut().append(SET_COOKIE, value);
                    }
                }
            }

            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_off_login_surface_redirects_to_login() {
        assert_eq!(classify(false, "/"), GuardAction::RedirectToLogin);
        assert_eq!(classify(false, "/dashboard"), GuardAction::RedirectToLogin);
        assert_eq!(
            classify(false, "/api/v1/projects"),
            GuardAction::RedirectToLogin
        );
    }

    #[test]
    fn unauthenticated_login_surface_passes_through() {
        assert_eq!(classify(false, "/login"), GuardAction::PassThrough);
        assert_eq!(classify(false, "/auth/login"), GuardAction::PassThrough);
        assert_eq!(classify(false, "/auth/signup"), GuardAction::PassThrough);
    }

    #[test]
    fn health_is_always_reachable() {
        assert_eq!(classify(false, "/health"), GuardAction::PassThrough);
        assert_eq!(classify(true, "/health"), GuardAction::PassThrough);
    }

    #[test]
    fn authenticated_on_login_page_redirects_to_dashboard() {
        assert_eq!(classify(true, "/login"), GuardAction::RedirectToDashboard);
    }

    #[test]
    fn authenticated_elsewhere_passes_through() {
        assert_eq!(classify(true, "/dashboard"), GuardAction::PassThrough);
        assert_eq!(classify(true, "/api/v1/projects"), GuardAction::PassThrough);
        assert_eq!(classify(true, "/auth/logout"), GuardAction::PassThrough);
    }
}
