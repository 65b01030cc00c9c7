use serde::{Deserialize, Serialize};

/// Identifier of an employee record. Positive, immutable once created.
pub type EmployeeId = u64;

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
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

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Key under which the record is stored in the cache.
    pub fn cache_key(id: EmployeeId) -> String {
        id.to_string()
    }
}
