use std::collections::HashMap;
use std::ops::Deref;

use async_trait::async_trait;
use domain::{Employee, EmployeeError, EmployeeId, Result};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::EmployeeStore;

/// Records plus the insertion-order index. Always mutated together.
#[derive(Debug, Default)]
struct EmployeeTable {
    records: HashMap<EmployeeId, Employee>,
    order: Vec<EmployeeId>,
}

impl EmployeeTable {
    fn from_records(employees: Vec<Employee>) -> Self {
        let mut table = Self {
            records: HashMap::with_capacity(employees.len()),
            order: Vec::with_capacity(employees.len()),
        };

        for employee in employees {
            if table.records.contains_key(&employee.id) {
                warn!("Skipping duplicate seed record for employee {}", employee.id);
                continue;
            }
            table.insert(employee);
        }

        table
    }

    fn insert(&mut self, employee: Employee) {
        self.order.push(employee.id);
        self.records.insert(employee.id, employee);
    }

    fn ordered(&self) -> Vec<Employee> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }
}

/// In-memory primary store.
///
/// `None` models a store with no backing table at all, which every
/// operation reports as [`EmployeeError::NotInitialized`]. A present but empty
/// table is reported as [`EmployeeError::EmptyData`], including by `create`,
/// so an empty store can never receive its first record.
pub struct InMemoryEmployeeStore {
    table: RwLock<Option<EmployeeTable>>,
}

impl InMemoryEmployeeStore {
    /// Create a store from caller-supplied records, or the built-in seed when `None`.
    pub fn new(employees: Option<Vec<Employee>>) -> Self {
        let employees = employees.unwrap_or_else(Self::seed);
        info!("Primary store initialized with {} records", employees.len());
        Self {
            table: RwLock::new(Some(EmployeeTable::from_records(employees))),
        }
    }

    /// A store with no backing table.
    pub fn uninitialized() -> Self {
        Self {
            table: RwLock::new(None),
        }
    }

    /// Sample data used when no records are supplied.
    pub fn seed() -> Vec<Employee> {
        vec![
            Employee::new(1, "Ada Lovelace", "ada@example.com", "555-0101", "12 St James's Square"),
            Employee::new(2, "Alan Turing", "alan@example.com", "555-0102", "78 High Street"),
        ]
    }

    /// Number of stored records; zero when uninitialized.
    pub async fn len(&self) -> usize {
        self.table
            .read()
            .await
            .as_ref()
            .map_or(0, |table| table.records.len())
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Shared precondition of every operation.
fn validate<T: Deref<Target = EmployeeTable>>(table: Option<T>) -> Result<T> {
    let table = table.ok_or(EmployeeError::NotInitialized)?;
    if table.records.is_empty() {
        return Err(EmployeeError::EmptyData);
    }
    Ok(table)
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list_all(&self) -> Result<Vec<Employee>> {
        debug!("Listing all employees from primary store");

        let guard = self.table.read().await;
        let table = validate(guard.as_ref())?;

        Ok(table.ordered())
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Employee> {
        debug!("Fetching employee {} from primary store", id);

        let guard = self.table.read().await;
        let table = validate(guard.as_ref())?;

        table
            .records
            .get(&id)
            .cloned()
            .ok_or(EmployeeError::NotFound(id))
    }

    async fn create(&self, employee: Employee) -> Result<()> {
        debug!("Creating employee {} in primary store", employee.id);

        let mut guard = self.table.write().await;
        let table = validate(guard.as_mut())?;

        if table.records.contains_key(&employee.id) {
            return Err(EmployeeError::AlreadyExists(employee.id));
        }

        let id = employee.id;
        table.insert(employee);
        info!("Employee {} stored, {} records total", id, table.records.len());

        Ok(())
    }
}
