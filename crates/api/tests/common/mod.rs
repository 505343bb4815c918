//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! on top of a test database pool, with a fake plan generator injected in
//! place of the Gemini client.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cineplan_api::auth::jwt::JwtConfig;
use cineplan_api::config::ServerConfig;
use cineplan_api::router::build_app_router;
use cineplan_api::state::AppState;
use cineplan_core::plan::{Character, FilmPlan};
use cineplan_genai::{GenAiError, PlanGenerator};

// ---------------------------------------------------------------------------
// Fake plan generator
// ---------------------------------------------------------------------------

/// A [`PlanGenerator`] whose outcome is fixed at construction.
pub struct FakePlanGenerator {
    outcome: Result<FilmPlan, ()>,
}

impl FakePlanGenerator {
    /// A generator that always returns the given plan.
    pub fn succeeding(plan: FilmPlan) -> Self {
        Self { outcome: Ok(plan) }
    }

    /// A generator that always fails, as if the provider were down.
    pub fn failing() -> Self {
        Self { outcome: Err(()) }
    }
}

#[async_trait]
impl PlanGenerator for FakePlanGenerator {
    async fn generate_plan(&self, _synopsis: &str) -> Result<FilmPlan, GenAiError> {
        match &self.outcome {
            Ok(plan) => Ok(plan.clone()),
            Err(()) => Err(GenAiError::Provider {
                status: 503,
                body: "simulated provider outage".to_string(),
            }),
        }
    }
}

/// A deterministic plan used across tests.
pub fn sample_plan() -> FilmPlan {
    FilmPlan {
        characters: vec![
            Character {
                name: "Nora".to_string(),
                role: "Protagoniste".to_string(),
                description: "Réalisatrice de documentaires, tenace".to_string(),
            },
            Character {
                name: "Élias".to_string(),
                role: "Antagoniste".to_string(),
                description: "Producteur qui enterre le projet".to_string(),
            },
        ],
        storytelling: "Un bras de fer entre vérité et financement.".to_string(),
        script_plan: vec![
            "1. Le rush interdit".to_string(),
            "2. La projection privée".to_string(),
            "3. La fuite du négatif".to_string(),
        ],
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: Some(JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            session_expiry_mins: 60,
        }),
    }
}

/// Build a test config with the identity layer unconfigured (fail-open).
pub fn test_config_without_auth() -> ServerConfig {
    ServerConfig {
        auth: None,
        ..test_config()
    }
}

/// Build the full application router with the default succeeding generator.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config(), Arc::new(FakePlanGenerator::succeeding(sample_plan())))
}

/// Build the full application router with a specific config and generator.
pub fn build_test_app_with(
    pool: PgPool,
    config: ServerConfig,
    generator: Arc<dyn PlanGenerator>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie), Some(json)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    json: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(cookie), Some(json)).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(cookie), None).await
}

/// Read and parse a JSON response body.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Extract the session cookie pair (`film_session=...`) from a response.
pub fn session_cookie_from(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response must set the session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair must be present")
        .to_string()
}

/// Sign up a fresh user through the API and return their session cookie.
pub async fn signup(app: Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    session_cookie_from(&response)
}
