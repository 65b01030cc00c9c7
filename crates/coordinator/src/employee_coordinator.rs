use std::sync::Arc;
use std::time::Instant;

use common::metrics::{self, CacheOutcome};
use domain::{Employee, EmployeeId, Result};
use storage::{CacheRead, EmployeeCache, EmployeeStore};
use tracing::{debug, error, info};

const CACHE_TYPE: &str = "employee";

/// Cache-aside coordinator between the primary store and the cache.
///
/// Reads go to the cache first and fall back to the primary store only on a
/// miss. Every write to the cache happens after the primary store call has
/// completed and must succeed for the operation to succeed.
///
/// `create` is not atomic across the two stores: when the cache write fails
/// the record stays in the primary store while the caller receives the error.
#[derive(Clone)]
pub struct EmployeeCoordinator {
    store: Arc<dyn EmployeeStore>,
    cache: Arc<dyn EmployeeCache>,
}

impl EmployeeCoordinator {
    pub fn new(store: Arc<dyn EmployeeStore>, cache: Arc<dyn EmployeeCache>) -> Self {
        Self { store, cache }
    }

    /// List every employee in insertion order and refresh the cache with them.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        let started = Instant::now();
        let result = self.list_all_inner().await;
        metrics::record_operation("list_all", result.is_ok(), started.elapsed().as_secs_f64());
        result
    }

    async fn list_all_inner(&self) -> Result<Vec<Employee>> {
        info!("Listing all employees");

        let employees = self.store.list_all().await?;

        if let Err(e) = self.cache.upsert_many(&employees).await {
            error!(error = %e, count = employees.len(), "Failed to refresh cache after listing");
            return Err(e);
        }

        debug!(count = employees.len(), "Listed employees and refreshed cache");
        Ok(employees)
    }

    /// Fetch one employee, consulting the cache first.
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Employee> {
        let started = Instant::now();
        let result = self.get_by_id_inner(id).await;
        metrics::record_operation("get_by_id", result.is_ok(), started.elapsed().as_secs_f64());
        result
    }

    async fn get_by_id_inner(&self, id: EmployeeId) -> Result<Employee> {
        info!(employee_id = id, "Fetching employee");

        match self.cache.read_one(id).await {
            Ok(CacheRead::Hit(employee)) => {
                metrics::record_cache_request(CACHE_TYPE, CacheOutcome::Hit);
                debug!(employee_id = id, "Cache hit");
                return Ok(employee);
            }
            Ok(CacheRead::Miss) => {
                metrics::record_cache_request(CACHE_TYPE, CacheOutcome::Miss);
                debug!(employee_id = id, "Cache miss, querying primary store");
            }
            // Only a miss falls back to the primary store
            Err(e) => {
                metrics::record_cache_request(CACHE_TYPE, CacheOutcome::Error);
                error!(employee_id = id, error = %e, "Failed to read employee from cache");
                return Err(e);
            }
        }

        let employee = self.store.get_by_id(id).await.map_err(|e| {
            info!(employee_id = id, error = %e, "Employee lookup in primary store failed");
            e
        })?;

        if let Err(e) = self.cache.upsert_one(&employee).await {
            error!(employee_id = id, error = %e, "Failed to write employee back to cache");
            return Err(e);
        }

        Ok(employee)
    }

    /// Insert a new employee into the primary store, then into the cache.
    pub async fn create(&self, employee: Employee) -> Result<()> {
        let started = Instant::now();
        let result = self.create_inner(employee).await;
        metrics::record_operation("create", result.is_ok(), started.elapsed().as_secs_f64());
        result
    }

    async fn create_inner(&self, employee: Employee) -> Result<()> {
        let id = employee.id;
        info!(employee_id = id, "Creating employee");

        if let Err(e) = self.store.create(employee.clone()).await {
            info!(employee_id = id, error = %e, "Primary store rejected employee");
            return Err(e);
        }

        // No rollback: the primary insert stands even if this fails
        if let Err(e) = self.cache.upsert_one(&employee).await {
            error!(
                employee_id = id,
                error = %e,
                "Employee stored but cache write failed; primary store and cache now disagree"
            );
            return Err(e);
        }

        info!(employee_id = id, "Employee created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::EmployeeError;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Store {}

        #[async_trait]
        impl EmployeeStore for Store {
            async fn list_all(&self) -> Result<Vec<Employee>>;
            async fn get_by_id(&self, id: EmployeeId) -> Result<Employee>;
            async fn create(&self, employee: Employee) -> Result<()>;
        }
    }

    mock! {
        pub Cache {}

        #[async_trait]
        impl EmployeeCache for Cache {
            async fn upsert_one(&self, employee: &Employee) -> Result<()>;
            async fn upsert_many(&self, employees: &[Employee]) -> Result<()>;
            async fn read_one(&self, id: EmployeeId) -> Result<CacheRead>;
            async fn delete_one(&self, id: EmployeeId) -> Result<()>;
            async fn ping(&self) -> Result<()>;
        }
    }

    fn alice() -> Employee {
        Employee::new(1, "Alice", "alice@example.com", "555-0100", "1 Main St")
    }

    fn bob() -> Employee {
        Employee::new(2, "Bob", "bob@example.com", "555-0101", "2 Main St")
    }

    fn carol() -> Employee {
        Employee::new(5, "Carol", "carol@example.com", "555-0105", "5 Main St")
    }

    fn cache_down() -> EmployeeError {
        EmployeeError::StoreError("connection refused".to_string())
    }

    fn coordinator(store: MockStore, cache: MockCache) -> EmployeeCoordinator {
        EmployeeCoordinator::new(Arc::new(store), Arc::new(cache))
    }

    #[tokio::test]
    async fn test_list_all_refreshes_cache() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        store
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![alice(), bob()]));
        cache
            .expect_upsert_many()
            .withf(|employees: &[Employee]| employees == [alice(), bob()])
            .times(1)
            .returning(|_| Ok(()));

        let employees = coordinator(store, cache).list_all().await.unwrap();
        assert_eq!(employees, vec![alice(), bob()]);
    }

    #[tokio::test]
    async fn test_list_all_store_error_skips_cache() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        store
            .expect_list_all()
            .times(1)
            .returning(|| Err(EmployeeError::EmptyData));
        cache.expect_upsert_many().never();

        let result = coordinator(store, cache).list_all().await;
        assert!(matches!(result, Err(EmployeeError::EmptyData)));
    }

    #[tokio::test]
    async fn test_list_all_fails_when_cache_refresh_fails() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        store
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![alice(), bob()]));
        cache
            .expect_upsert_many()
            .times(1)
            .returning(|_| Err(cache_down()));

        let result = coordinator(store, cache).list_all().await;
        assert!(matches!(result, Err(EmployeeError::StoreError(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_cache_hit_never_touches_store() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        cache
            .expect_read_one()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(CacheRead::Hit(carol())));
        cache.expect_upsert_one().never();
        store.expect_get_by_id().never();

        let employee = coordinator(store, cache).get_by_id(5).await.unwrap();
        assert_eq!(employee, carol());
    }

    #[tokio::test]
    async fn test_get_by_id_cache_miss_reads_store_and_writes_back() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        cache
            .expect_read_one()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(CacheRead::Miss));
        store
            .expect_get_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(carol()));
        cache
            .expect_upsert_one()
            .withf(|employee: &Employee| *employee == carol())
            .times(1)
            .returning(|_| Ok(()));

        let employee = coordinator(store, cache).get_by_id(5).await.unwrap();
        assert_eq!(employee, carol());
    }

    #[tokio::test]
    async fn test_get_by_id_cache_error_does_not_fall_back() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        cache
            .expect_read_one()
            .times(1)
            .returning(|_| Err(cache_down()));
        store.expect_get_by_id().never();
        cache.expect_upsert_one().never();

        let result = coordinator(store, cache).get_by_id(5).await;
        assert!(matches!(result, Err(EmployeeError::StoreError(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_store_error_propagates() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        cache.expect_read_one().returning(|_| Ok(CacheRead::Miss));
        store
            .expect_get_by_id()
            .with(eq(42))
            .times(1)
            .returning(|id| Err(EmployeeError::NotFound(id)));
        cache.expect_upsert_one().never();

        let result = coordinator(store, cache).get_by_id(42).await;
        assert!(matches!(result, Err(EmployeeError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_get_by_id_fails_when_write_back_fails() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        cache.expect_read_one().returning(|_| Ok(CacheRead::Miss));
        store.expect_get_by_id().times(1).returning(|_| Ok(carol()));
        cache
            .expect_upsert_one()
            .times(1)
            .returning(|_| Err(cache_down()));

        let result = coordinator(store, cache).get_by_id(5).await;
        assert!(matches!(result, Err(EmployeeError::StoreError(_))));
    }

    #[tokio::test]
    async fn test_create_writes_store_then_cache() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();
        let mut seq = mockall::Sequence::new();

        store
            .expect_create()
            .with(eq(carol()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        cache
            .expect_upsert_one()
            .withf(|employee: &Employee| *employee == carol())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        coordinator(store, cache).create(carol()).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_duplicate_never_writes_cache() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        store
            .expect_create()
            .times(1)
            .returning(|employee| Err(EmployeeError::AlreadyExists(employee.id)));
        cache.expect_upsert_one().never();

        let result = coordinator(store, cache).create(carol()).await;
        assert!(matches!(result, Err(EmployeeError::AlreadyExists(5))));
    }

    #[tokio::test]
    async fn test_create_uninitialized_store_propagates() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        store
            .expect_create()
            .returning(|_| Err(EmployeeError::NotInitialized));
        cache.expect_upsert_one().never();

        let result = coordinator(store, cache).create(carol()).await;
        assert!(matches!(result, Err(EmployeeError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_create_reports_cache_failure_after_store_write() {
        let mut store = MockStore::new();
        let mut cache = MockCache::new();

        store.expect_create().times(1).returning(|_| Ok(()));
        cache
            .expect_upsert_one()
            .times(1)
            .returning(|_| Err(cache_down()));

        let result = coordinator(store, cache).create(carol()).await;
        assert!(matches!(result, Err(EmployeeError::StoreError(_))));
    }
}
