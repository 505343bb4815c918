//! HTTP-level integration tests for the plan-generation cycle.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, sample_plan, FakePlanGenerator};
use cineplan_core::plan::FilmPlan;
use sqlx::PgPool;

async fn signup_and_create_project(pool: &PgPool, email: &str) -> (String, i64) {
    let app = common::build_test_app(pool.clone());
    let cookie = common::signup(app, email, "plan-sequence-9").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/projects", serde_json::json!({}), &cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    (cookie, created["id"].as_i64().unwrap())
}

#[sqlx::test(migrations = "../db/migrations")]
async fn successful_generation_persists_synopsis_and_full_plan(pool: PgPool) {
    let (cookie, id) = signup_and_create_project(&pool, "gen@studio.fr").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{id}/generate"),
        serde_json::json!({
            "synopsis": "Un phare isolé, une porte sous la mer.",
            "title": "La porte",
        }),
        &cookie,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "La porte");
    assert_eq!(json["synopsis"], "Un phare isolé, une porte sous la mer.");

    // The persisted plan is the full, typed object the fake returned.
    let plan: FilmPlan = serde_json::from_value(json["generated_plan"].clone()).unwrap();
    assert_eq!(plan, sample_plan());

    // Re-reading confirms persistence.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/projects/{id}"), &cookie).await;
    let json = body_json(response).await;
    let plan: FilmPlan = serde_json::from_value(json["generated_plan"].clone()).unwrap();
    assert_eq!(plan, sample_plan());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_generation_returns_502_and_preserves_previous_plan(pool: PgPool) {
    let (cookie, id) = signup_and_create_project(&pool, "outage@studio.fr").await;

    // First generation succeeds and stores a plan.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{id}/generate"),
        serde_json::json!({ "synopsis": "Premier synopsis." }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second attempt hits a failing provider.
    let app = common::build_test_app_with(
        pool.clone(),
        common::test_config(),
        Arc::new(FakePlanGenerator::failing()),
    );
    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{id}/generate"),
        serde_json::json!({ "synopsis": "Deuxième synopsis." }),
        &cookie,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GENERATION_FAILED");
    // The failure cause stays in the logs, never in the message.
    assert_eq!(json["error"], "Film plan generation failed");

    // The earlier plan is untouched; the synopsis edit was saved.
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/projects/{id}"), &cookie).await;
    let json = body_json(response).await;
    assert_eq!(json["synopsis"], "Deuxième synopsis.");
    let plan: FilmPlan = serde_json::from_value(json["generated_plan"].clone()).unwrap();
    assert_eq!(plan, sample_plan());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_generation_on_fresh_project_stores_no_plan(pool: PgPool) {
    let (cookie, id) = signup_and_create_project(&pool, "fresh@studio.fr").await;

    let app = common::build_test_app_with(
        pool.clone(),
        common::test_config(),
        Arc::new(FakePlanGenerator::failing()),
    );
    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{id}/generate"),
        serde_json::json!({ "synopsis": "Un début." }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/projects/{id}"), &cookie).await;
    let json = body_json(response).await;
    assert!(json["generated_plan"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_synopsis_is_rejected_before_any_provider_call(pool: PgPool) {
    let (cookie, id) = signup_and_create_project(&pool, "blank@studio.fr").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{id}/generate"),
        serde_json::json!({ "synopsis": "   " }),
        &cookie,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generating_on_a_missing_project_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = common::signup(app, "nobody@studio.fr", "plan-sequence-9").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/projects/999999/generate",
        serde_json::json!({ "synopsis": "Un synopsis." }),
        &cookie,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
