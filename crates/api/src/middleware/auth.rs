//! Authenticated-user extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cineplan_core::error::CoreError;
use cineplan_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Identity resolved by the session guard for the current request.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's email address.
    pub email: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not authenticated".into())))
    }
}
