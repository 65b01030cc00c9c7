pub mod cache;
pub mod primary;

pub use cache::{CacheRead, EmployeeCache, InMemoryEmployeeCache, RedisEmployeeCache};
pub use primary::{EmployeeStore, InMemoryEmployeeStore};
