//! Minimal page shells.
//!
//! The real presentation layer lives in the frontend; these handlers only
//! give the session guard concrete pages to protect and redirect between.

use axum::response::{Html, Redirect};

/// GET / -- entry point; the guard bounces unauthenticated callers to
/// `/login` before this redirect even matters.
pub async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /login
pub async fn login() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><head><title>Connexion</title></head><body><div id=\"app\" data-page=\"login\"></div></body></html>")
}

/// GET /dashboard
pub async fn dashboard() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><head><title>Mes projets</title></head><body><div id=\"app\" data-page=\"dashboard\"></div></body></html>")
}
