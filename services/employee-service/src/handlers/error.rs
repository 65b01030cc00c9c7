use axum::{http::StatusCode, Json};
use domain::EmployeeError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map an error kind to the HTTP status reported for it
pub fn status_for(error: &EmployeeError) -> StatusCode {
    match error {
        EmployeeError::NotFound(_) | EmployeeError::EmptyData => StatusCode::NOT_FOUND,
        EmployeeError::AlreadyExists(_) => StatusCode::CONFLICT,
        EmployeeError::NotInitialized
        | EmployeeError::StoreError(_)
        | EmployeeError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<EmployeeError> for ErrorResponse {
    fn from(error: EmployeeError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

pub fn from_employee_error(error: EmployeeError) -> ApiError {
    (status_for(&error), Json(error.into()))
}
