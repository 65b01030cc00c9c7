use thiserror::Error;

use crate::employee::EmployeeId;

/// Failures surfaced by the primary store, the cache and the coordinator.
///
/// A cache miss is deliberately absent: it is a normal outcome of a cache
/// lookup, not an error.
#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("data not initialized")]
    NotInitialized,

    #[error("data is empty")]
    EmptyData,

    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("employee already exists: {0}")]
    AlreadyExists(EmployeeId),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl EmployeeError {
    /// True for the "nothing to return" kinds a caller would report as not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EmployeeError::NotFound(_) | EmployeeError::EmptyData)
    }
}

pub type Result<T> = std::result::Result<T, EmployeeError>;
