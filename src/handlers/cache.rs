use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct RefreshQuery {
    pub branch_id: Option<String>,
}

/// POST /api/cache/refresh — drop cached branch schedules so the next view
/// refetches. With a `branch_id`, only that branch; without, everything.
pub async fn refresh_cache(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RefreshQuery>,
) -> Json<serde_json::Value> {
    match query.branch_id.as_deref() {
        Some(branch_id) => {
            state.schedule.invalidate(branch_id).await;
            tracing::info!(branch_id = %branch_id, "branch schedule cache invalidated");
        }
        None => {
            state.schedule.clear().await;
            tracing::info!("schedule cache cleared");
        }
    }
    Json(serde_json::json!({ "status": "ok" }))
}
