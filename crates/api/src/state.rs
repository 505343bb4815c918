use std::sync::Arc;

use cineplan_genai::PlanGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The plan
/// generator is an injected trait object so tests can substitute a fake.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cineplan_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Structured plan generation client.
    pub generator: Arc<dyn PlanGenerator>,
}
