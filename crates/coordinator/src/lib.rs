pub mod employee_coordinator;

pub use employee_coordinator::EmployeeCoordinator;
