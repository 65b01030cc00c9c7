use axum::{extract::State, Json};
use domain::Employee;
use tracing::{error, info};

use super::error::{from_employee_error, ApiError};
use crate::state::AppState;

/// List all employees in insertion order
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    info!("Listing employees");

    match state.coordinator.list_all().await {
        Ok(employees) => {
            info!("Returning {} employees", employees.len());
            Ok(Json(employees))
        }
        Err(e) => {
            error!("Failed to list employees: {}", e);
            Err(from_employee_error(e))
        }
    }
}
