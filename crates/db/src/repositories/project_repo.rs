//! Repository for the `projects` table.
//!
//! Every method is scoped to the owning user: the `owner_id` filter appears
//! in each WHERE clause, so a row belonging to another user is
//! indistinguishable from a missing one.

use sqlx::types::Json;
use sqlx::PgPool;

use cineplan_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, owner_id, title, project_type, synopsis, generated_plan, created_at, updated_at";

/// Provides owner-scoped CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `owner_id`, returning the created row.
    ///
    /// The title starts as the placeholder default; `project_type` defaults
    /// to `short-film` if `None` in the input.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, project_type)
             VALUES ($1, COALESCE($2, 'short-film'::project_type))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(input.project_type)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID, visible only to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects owned by `owner_id`, most recently updated first.
    pub async fn list(pool: &PgPool, owner_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE owner_id = $1 ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` is visible to the owner.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($3, title),
                synopsis = COALESCE($4, synopsis),
                project_type = COALESCE($5, project_type),
                generated_plan = COALESCE($6, generated_plan),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.synopsis)
            .bind(input.project_type)
            .bind(input.generated_plan.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row owned by `owner_id`
    /// was removed; deleting a nonexistent or inaccessible id returns
    /// `false`.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
