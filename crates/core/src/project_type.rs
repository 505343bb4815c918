//! The fixed enumeration of film project formats.

use serde::{Deserialize, Serialize};

/// Format of a film project.
///
/// Stored in Postgres as the `project_type` enum type, serialized over the
/// wire in kebab-case (e.g. `"short-film"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "project_type", rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    ShortFilm,
    VideoClip,
    WebSeries,
    Documentary,
    Advertisement,
}
