//! Organization structure records: departments and job definitions.

use super::employee::EmployeeId;
use super::geo::LocationId;
use super::validation::{require_text, ModelValidationError};
use super::Keyed;
use serde::{Deserialize, Serialize};

pub type DepartmentId = u32;
/// Job code, e.g. `IT_PROG` or `SA_REP`.
pub type JobId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// `None` for departments that currently have no manager.
    pub manager_id: Option<EmployeeId>,
    pub location_id: LocationId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
}

impl Department {
    pub fn new(id: DepartmentId, name: impl Into<String>, location_id: LocationId) -> Self {
        Self {
            id,
            name: name.into(),
            manager_id: None,
            location_id,
        }
    }

    pub fn with_manager(mut self, manager_id: EmployeeId) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("name", &self.name)
    }
}

impl Job {
    pub fn new(id: impl Into<JobId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("id", &self.id)?;
        require_text("title", &self.title)
    }
}

impl Keyed for Department {
    type Key = DepartmentId;

    fn key(&self) -> &DepartmentId {
        &self.id
    }
}

impl Keyed for Job {
    type Key = JobId;

    fn key(&self) -> &JobId {
        &self.id
    }
}
