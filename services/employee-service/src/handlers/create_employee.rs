use axum::{extract::State, http::StatusCode, Json};
use domain::{Employee, EmployeeId};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

use super::error::{api_error, from_employee_error, ApiError};
use crate::state::AppState;

/// Request body for creating an employee
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(range(min = 1))]
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Employee::new(req.id, req.name, req.email, req.phone, req.address)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
    pub id: EmployeeId,
    pub status: String,
}

/// Handle create employee request
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<CreateEmployeeResponse>), ApiError> {
    info!("Received create employee request for id: {}", req.id);

    if let Err(e) = req.validate() {
        error!("Validation error: {}", e);
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!("Validation error: {}", e),
        ));
    }

    let id = req.id;
    if let Err(e) = state.coordinator.create(req.into()).await {
        error!("Failed to create employee {}: {}", id, e);
        return Err(from_employee_error(e));
    }

    info!("Employee created successfully: {}", id);

    Ok((
        StatusCode::CREATED,
        Json(CreateEmployeeResponse {
            id,
            status: "created".to_string(),
        }),
    ))
}
