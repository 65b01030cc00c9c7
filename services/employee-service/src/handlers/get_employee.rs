use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::{Employee, EmployeeId};
use tracing::{error, info};

use super::error::{api_error, from_employee_error, ApiError};
use crate::state::AppState;

/// Get a single employee by ID
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Employee>, ApiError> {
    if id == 0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid id: must be a positive integer",
        ));
    }

    info!("Fetching employee: {}", id);

    match state.coordinator.get_by_id(id).await {
        Ok(employee) => {
            info!("Successfully retrieved employee: {}", id);
            Ok(Json(employee))
        }
        Err(e) if e.is_not_found() => {
            info!("Employee not found: {}", id);
            Err(from_employee_error(e))
        }
        Err(e) => {
            error!("Failed to fetch employee {}: {}", id, e);
            Err(from_employee_error(e))
        }
    }
}
