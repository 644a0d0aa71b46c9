//! Employee directory store with a configurable head-count ceiling.
//!
//! # Invariants
//! - `add_employee` never grows the directory past `limit`.
//! - Deleting an employee leaves task assignments untouched.

use crate::model::employee::{Employee, EmployeePatch, EmploymentStatus, NewEmployee};
use crate::model::{new_record_id, RecordId};
use crate::repo::{Collection, Record, RepoResult};
use crate::storage::SharedStorage;
use crate::store::{StoreError, StoreResult, EMPLOYEE_STORAGE_KEY};
use log::{info, warn};

impl Record for Employee {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct EmployeeStore {
    employees: Collection<Employee>,
    limit: usize,
}

impl EmployeeStore {
    pub fn open(storage: SharedStorage, limit: usize) -> RepoResult<Self> {
        Ok(Self {
            employees: Collection::load(storage, EMPLOYEE_STORAGE_KEY)?,
            limit,
        })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn employees(&self) -> &[Employee] {
        self.employees.items()
    }

    pub fn get_employee(&self, id: RecordId) -> Option<&Employee> {
        self.employees.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.employees.revision()
    }

    /// Adds an employee unless the directory is already full.
    pub fn add_employee(&mut self, request: NewEmployee) -> StoreResult<Employee> {
        if self.employees.len() >= self.limit {
            warn!(
                "event=employee_add module=employee status=error error_code=limit_reached limit={}",
                self.limit
            );
            return Err(StoreError::EmployeeLimitReached { limit: self.limit });
        }

        let employee = request.into_employee(new_record_id());
        employee.validate()?;
        self.employees.insert(employee.clone())?;
        info!(
            "event=employee_add module=employee status=ok employee_id={} count={}",
            employee.id,
            self.employees.len()
        );
        Ok(employee)
    }

    pub fn update_employee(&mut self, id: RecordId, patch: EmployeePatch) -> StoreResult<Employee> {
        self.employees.update(id, |employee| {
            patch.apply_to(employee);
            employee.validate().map_err(StoreError::from)
        })
    }

    pub fn delete_employee(&mut self, id: RecordId) -> StoreResult<Employee> {
        let removed = self.employees.remove(id)?;
        info!("event=employee_delete module=employee status=ok employee_id={id}");
        Ok(removed)
    }

    /// Employees whose back-reference points at `manager_id`.
    pub fn employees_by_manager(&self, manager_id: RecordId) -> Vec<Employee> {
        self.employees.filter(|employee| employee.manager_id == Some(manager_id))
    }

    pub fn active_employees(&self) -> Vec<Employee> {
        self.employees.filter(|employee| employee.status == EmploymentStatus::Active)
    }
}
