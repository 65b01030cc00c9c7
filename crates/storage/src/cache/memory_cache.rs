use std::collections::HashMap;

use async_trait::async_trait;
use domain::{Employee, EmployeeId, Result};
use tokio::sync::RwLock;
use tracing::debug;

use super::{encode_batch, CacheRead, EmployeeCache};

/// Process-local cache with the same serialized layout as the Redis cache.
#[derive(Default)]
pub struct InMemoryEmployeeCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryEmployeeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Store raw bytes under a key, bypassing serialization.
    pub async fn insert_raw(&self, id: EmployeeId, bytes: Vec<u8>) {
        self.entries
            .write()
            .await
            .insert(Employee::cache_key(id), bytes);
    }
}

#[async_trait]
impl EmployeeCache for InMemoryEmployeeCache {
    async fn upsert_one(&self, employee: &Employee) -> Result<()> {
        let bytes = serde_json::to_vec(employee)?;
        self.entries
            .write()
            .await
            .insert(Employee::cache_key(employee.id), bytes);

        debug!("Cached employee {}", employee.id);
        Ok(())
    }

    async fn upsert_many(&self, employees: &[Employee]) -> Result<()> {
        let batch = encode_batch(employees)?;

        let mut entries = self.entries.write().await;
        entries.extend(batch);

        debug!("Cached {} employees", employees.len());
        Ok(())
    }

    async fn read_one(&self, id: EmployeeId) -> Result<CacheRead> {
        let entries = self.entries.read().await;

        match entries.get(&Employee::cache_key(id)) {
            Some(bytes) => {
                debug!("Cache hit for employee {}", id);
                Ok(CacheRead::Hit(serde_json::from_slice(bytes)?))
            }
            None => {
                debug!("Cache miss for employee {}", id);
                Ok(CacheRead::Miss)
            }
        }
    }

    async fn delete_one(&self, id: EmployeeId) -> Result<()> {
        self.entries.write().await.remove(&Employee::cache_key(id));

        debug!("Deleted cache for employee {}", id);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::EmployeeError;

    #[tokio::test]
    async fn test_cache_operations() {
        let cache = InMemoryEmployeeCache::new();
        let employee = Employee::new(5, "Carol", "carol@example.com", "", "");

        assert_eq!(cache.read_one(5).await.unwrap(), CacheRead::Miss);

        cache.upsert_one(&employee).await.unwrap();
        assert_eq!(cache.read_one(5).await.unwrap(), CacheRead::Hit(employee.clone()));

        let renamed = Employee::new(5, "Caroline", "", "", "");
        cache.upsert_one(&renamed).await.unwrap();
        assert_eq!(cache.read_one(5).await.unwrap(), CacheRead::Hit(renamed));
        assert_eq!(cache.len().await, 1);

        cache.delete_one(5).await.unwrap();
        assert_eq!(cache.read_one(5).await.unwrap(), CacheRead::Miss);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_upsert_many() {
        let cache = InMemoryEmployeeCache::new();
        let employees = vec![
            Employee::new(1, "Alice", "", "", ""),
            Employee::new(2, "Bob", "", "", ""),
        ];

        cache.upsert_many(&employees).await.unwrap();

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.read_one(2).await.unwrap(), CacheRead::Hit(employees[1].clone()));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_error_not_miss() {
        let cache = InMemoryEmployeeCache::new();
        cache.insert_raw(9, b"not json".to_vec()).await;

        let result = cache.read_one(9).await;
        assert!(matches!(result, Err(EmployeeError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let cache = InMemoryEmployeeCache::new();
        assert!(cache.delete_one(404).await.is_ok());
    }
}
