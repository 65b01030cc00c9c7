pub mod create_employee;
pub mod error;
pub mod evict_cached_employee;
pub mod get_employee;
pub mod health;
pub mod list_employees;
