//! The plan-generation cycle for a project.
//!
//! One user action, one round trip: persist the synopsis (and any pending
//! title/type edits), call the generation client once, and persist the
//! returned plan wholesale. A failed generation writes nothing, so a
//! previously generated plan is never lost to a failure.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use cineplan_core::error::CoreError;
use cineplan_core::project_type::ProjectType;
use cineplan_core::types::DbId;
use cineplan_db::models::project::{Project, UpdateProject};
use cineplan_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Request body for `POST /api/v1/projects/{id}/generate`.
///
/// Carries the synopsis plus whatever metadata edits the user made since
/// the last save; everything is persisted before the provider is called.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub synopsis: String,
    pub title: Option<String>,
    pub project_type: Option<ProjectType>,
}

/// POST /api/v1/projects/{id}/generate
pub async fn generate(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<Json<Project>> {
    let synopsis = input.synopsis.trim();
    if synopsis.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Synopsis must not be empty".into(),
        )));
    }

    // Save synopsis and pending edits first, exactly like an explicit save.
    // This also establishes that the project exists and belongs to the
    // caller before any provider call is made.
    ProjectRepo::update(
        &state.pool,
        user.user_id,
        id,
        &UpdateProject {
            title: input.title,
            synopsis: Some(synopsis.to_string()),
            project_type: input.project_type,
            generated_plan: None,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    }))?;

    // One attempt, no retry. On failure nothing more is written.
    let plan = state.generator.generate_plan(synopsis).await?;

    let project = ProjectRepo::update(
        &state.pool,
        user.user_id,
        id,
        &UpdateProject {
            generated_plan: Some(plan),
            ..Default::default()
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    }))?;

    tracing::info!(project_id = id, user_id = user.user_id, "Film plan generated");
    Ok(Json(project))
}
