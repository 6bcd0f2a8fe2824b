use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Service;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ServicesQuery {
    pub branch_id: String,
    pub staff_id: Option<String>,
}

/// GET /api/services — the branch's service catalog, optionally narrowed to
/// what one staff member is eligible to perform.
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let schedule = state
        .schedule
        .branch_schedule(state.platform.as_ref(), &query.branch_id)
        .await?;

    let services = schedule
        .services
        .iter()
        .filter(|service| match query.staff_id.as_deref() {
            Some(staff_id) => service.performable_by(staff_id),
            None => true,
        })
        .cloned()
        .collect();

    Ok(Json(services))
}
