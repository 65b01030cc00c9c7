mod memory_cache;
mod redis_cache;

pub use memory_cache::InMemoryEmployeeCache;
pub use redis_cache::RedisEmployeeCache;

use async_trait::async_trait;
use domain::{Employee, EmployeeId, Result};

/// Outcome of a cache lookup that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheRead {
    Hit(Employee),
    Miss,
}

impl CacheRead {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheRead::Hit(_))
    }
}

/// Best-effort accelerator holding serialized employee records
#[async_trait]
pub trait EmployeeCache: Send + Sync {
    /// Store one record, overwriting any previous value
    async fn upsert_one(&self, employee: &Employee) -> Result<()>;

    /// Store a batch. Every record is serialized before anything is written,
    /// so one bad record leaves the cache untouched.
    async fn upsert_many(&self, employees: &[Employee]) -> Result<()>;

    /// Look up a record. A missing key is `CacheRead::Miss`, not an error.
    async fn read_one(&self, id: EmployeeId) -> Result<CacheRead>;

    /// Remove a record
    async fn delete_one(&self, id: EmployeeId) -> Result<()>;

    /// Check if the cache is reachable (health check)
    async fn ping(&self) -> Result<()>;
}

/// Serialize a batch into `(key, bytes)` pairs, stopping at the first failure.
pub(crate) fn encode_batch(employees: &[Employee]) -> Result<Vec<(String, Vec<u8>)>> {
    employees
        .iter()
        .map(|employee| {
            let bytes = serde_json::to_vec(employee)?;
            Ok((Employee::cache_key(employee.id), bytes))
        })
        .collect()
}
