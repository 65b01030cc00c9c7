pub mod employee;
pub mod errors;

pub use employee::{Employee, EmployeeId};
pub use errors::{EmployeeError, Result};
