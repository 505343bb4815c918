//! Route definitions for the page shells.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Top-level page routes.
///
/// ```text
/// GET /           -> index (redirects to /dashboard)
/// GET /login      -> login shell
/// GET /dashboard  -> dashboard shell
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login))
        .route("/dashboard", get(pages::dashboard))
}
