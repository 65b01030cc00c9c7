use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use domain::EmployeeId;
use tracing::{error, info};

use super::error::{from_employee_error, ApiError};
use crate::state::AppState;

/// Drop one employee from the cache. The primary store is not touched.
pub async fn evict_cached_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, ApiError> {
    info!("Evicting employee {} from cache", id);

    match state.cache.delete_one(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to evict employee {} from cache: {}", id, e);
            Err(from_employee_error(e))
        }
    }
}
