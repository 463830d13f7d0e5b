//! Employee and job history records.
//!
//! # Invariants
//! - `salary` is unsigned, so it can never be negative.
//! - A job history entry never ends before it starts.
//! - Name derivations assume exactly one first name and one last name.

use super::org::{DepartmentId, JobId};
use super::validation::{require_text, ModelValidationError};
use super::Keyed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EmployeeId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: u64,
    pub job_id: JobId,
    pub department_id: DepartmentId,
    /// `None` only for the top of the reporting chain.
    pub manager_id: Option<EmployeeId>,
}

/// One closed period an employee spent in a previous job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobHistory {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub job_id: JobId,
    pub department_id: DepartmentId,
}

impl Employee {
    /// Creates an employee without a manager.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: u64,
        job_id: impl Into<JobId>,
        department_id: DepartmentId,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            job_id: job_id.into(),
            department_id,
            manager_id: None,
        }
    }

    pub fn with_manager(mut self, manager_id: EmployeeId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_text("job_id", &self.job_id)
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the first letter of the first name followed by the first
    /// letter of the last name, e.g. `SK` for Steven King.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    /// Character count of [`Employee::full_name`], computed without allocating.
    pub fn full_name_len(&self) -> usize {
        self.first_name.chars().count() + 1 + self.last_name.chars().count()
    }
}

impl JobHistory {
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("job_id", &self.job_id)?;
        if self.end_date < self.start_date {
            return Err(ModelValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

impl Keyed for Employee {
    type Key = EmployeeId;

    fn key(&self) -> &EmployeeId {
        &self.id
    }
}
