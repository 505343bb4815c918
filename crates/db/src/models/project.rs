//! Project entity model and DTOs.

use cineplan_core::plan::FilmPlan;
use cineplan_core::project_type::ProjectType;
use cineplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `generated_plan` is absent until a generation succeeds and is then
/// overwritten wholesale on each later success. When present it always
/// deserializes to a complete [`FilmPlan`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub project_type: ProjectType,
    pub synopsis: Option<String>,
    pub generated_plan: Option<Json<FilmPlan>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    /// Defaults to `short-film` if omitted.
    pub project_type: Option<ProjectType>,
}

/// DTO for updating an existing project. All fields are optional; `id` and
/// `owner_id` are not representable here and therefore not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub project_type: Option<ProjectType>,
    pub generated_plan: Option<FilmPlan>,
}
