use async_trait::async_trait;
use domain::{Employee, EmployeeError, EmployeeId, Result};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};
use tracing::{debug, error, info};

use super::{encode_batch, CacheRead, EmployeeCache};

fn store_error(context: &str, e: RedisError) -> EmployeeError {
    EmployeeError::StoreError(format!("{}: {}", context, e))
}

/// Redis cache for employee records. Entries never expire.
pub struct RedisEmployeeCache {
    conn: ConnectionManager,
}

impl RedisEmployeeCache {
    /// Create new Redis cache
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| store_error("Failed to create Redis client", e))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| store_error("Failed to connect to Redis", e))?;

        info!("Redis employee cache initialized");
        Ok(Self { conn })
    }
}

#[async_trait]
impl EmployeeCache for RedisEmployeeCache {
    async fn upsert_one(&self, employee: &Employee) -> Result<()> {
        let cache_key = Employee::cache_key(employee.id);
        let bytes = serde_json::to_vec(employee)?;

        self.conn
            .clone()
            .set::<_, _, ()>(&cache_key, bytes)
            .await
            .map_err(|e| {
                error!("Failed to set cache for key {}: {}", cache_key, e);
                store_error("inserting value in redis", e)
            })?;

        debug!("Cached value for key: {}", cache_key);
        Ok(())
    }

    async fn upsert_many(&self, employees: &[Employee]) -> Result<()> {
        let batch = encode_batch(employees)?;
        if batch.is_empty() {
            return Ok(());
        }

        let mut pipe = redis::pipe();
        for (key, bytes) in batch {
            pipe.set(key, bytes).ignore();
        }

        pipe.query_async::<_, ()>(&mut self.conn.clone())
            .await
            .map_err(|e| {
                error!("Failed to cache {} employees: {}", employees.len(), e);
                store_error("inserting values in multiple upsert redis", e)
            })?;

        debug!("Cached {} employees", employees.len());
        Ok(())
    }

    async fn read_one(&self, id: EmployeeId) -> Result<CacheRead> {
        let cache_key = Employee::cache_key(id);

        let value = self
            .conn
            .clone()
            .get::<_, Option<Vec<u8>>>(&cache_key)
            .await
            .map_err(|e| {
                error!("Redis error for key {}: {}", cache_key, e);
                store_error("getting employee from redis", e)
            })?;

        match value {
            Some(bytes) => {
                debug!("Cache hit for key: {}", cache_key);
                let employee = serde_json::from_slice(&bytes).map_err(|e| {
                    error!("Failed to deserialize cached value for {}: {}", cache_key, e);
                    e
                })?;
                Ok(CacheRead::Hit(employee))
            }
            None => {
                debug!("Cache miss for key: {}", cache_key);
                Ok(CacheRead::Miss)
            }
        }
    }

    async fn delete_one(&self, id: EmployeeId) -> Result<()> {
        let cache_key = Employee::cache_key(id);

        self.conn
            .clone()
            .del::<_, ()>(&cache_key)
            .await
            .map_err(|e| {
                error!("Failed to delete cache for key {}: {}", cache_key, e);
                store_error("deleting employee from redis", e)
            })?;

        debug!("Deleted cache for key: {}", cache_key);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let result: std::result::Result<String, RedisError> = redis::cmd("PING")
            .query_async(&mut self.conn.clone())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(store_error("Redis ping failed", e)),
        }
    }
}
