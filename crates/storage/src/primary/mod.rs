mod in_memory_store;

pub use in_memory_store::InMemoryEmployeeStore;

use async_trait::async_trait;
use domain::{Employee, EmployeeId, Result};

/// Authoritative employee repository
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, in insertion order
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// Get a single employee by ID
    async fn get_by_id(&self, id: EmployeeId) -> Result<Employee>;

    /// Insert a new employee. Never overwrites an existing one.
    async fn create(&self, employee: Employee) -> Result<()>;
}
