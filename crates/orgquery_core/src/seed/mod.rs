//! Dataset bootstrap for the in-memory organization schema.
//!
//! # Responsibility
//! - Parse the dataset document (embedded sample or caller-provided JSON).
//! - Reject invalid records, duplicate ids and dangling references before
//!   any repository is built.
//!
//! # Invariants
//! - A `Dataset` returned from this module has every foreign id resolved.
//! - Record order is the document order; repositories keep it.
//!
//! # See also
//! - `data/hr_sample.json` for the reference sample (107 employees,
//!   27 departments, 10 job history entries).

use crate::model::employee::{Employee, JobHistory};
use crate::model::geo::{Country, Location, Region};
use crate::model::org::{Department, Job};
use crate::model::validation::ModelValidationError;
use crate::model::Keyed;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const SAMPLE_DATASET_JSON: &str = include_str!("../../data/hr_sample.json");

pub type SeedResult<T> = Result<T, SeedError>;

/// Load-time failure for a dataset document.
#[derive(Debug)]
pub enum SeedError {
    Parse(serde_json::Error),
    Validation {
        entity: &'static str,
        id: String,
        source: ModelValidationError,
    },
    DuplicateId {
        entity: &'static str,
        id: String,
    },
    DanglingReference {
        entity: &'static str,
        id: String,
        field: &'static str,
        target: String,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed dataset document: {err}"),
            Self::Validation { entity, id, source } => write!(f, "invalid {entity} {id}: {source}"),
            Self::DuplicateId { entity, id } => write!(f, "duplicate {entity} id: {id}"),
            Self::DanglingReference {
                entity,
                id,
                field,
                target,
            } => write!(f, "{entity} {id}: `{field}` references missing {target}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Validation { source, .. } => Some(source),
            Self::DuplicateId { .. } => None,
            Self::DanglingReference { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Every entity collection of the organization schema, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    pub regions: Vec<Region>,
    pub countries: Vec<Country>,
    pub locations: Vec<Location>,
    pub departments: Vec<Department>,
    pub jobs: Vec<Job>,
    pub employees: Vec<Employee>,
    pub job_history: Vec<JobHistory>,
}

impl Dataset {
    /// Loads the embedded HR sample dataset.
    pub fn sample() -> SeedResult<Self> {
        load("embedded", SAMPLE_DATASET_JSON)
    }

    /// Parses and validates a dataset document with the sample's shape.
    ///
    /// # Side effects
    /// - Emits `dataset_load` logging events with duration and status.
    pub fn from_json(document: &str) -> SeedResult<Self> {
        load("json", document)
    }

    /// Checks record-level invariants and referential integrity.
    ///
    /// # Errors
    /// - `Validation` when a record fails its own `validate()`.
    /// - `DuplicateId` when two records of one collection share an id.
    /// - `DanglingReference` when a foreign id has no target record.
    pub fn validate(&self) -> SeedResult<()> {
        validate_records("region", &self.regions, key_of, Region::validate)?;
        validate_records("country", &self.countries, key_of, Country::validate)?;
        validate_records("location", &self.locations, key_of, Location::validate)?;
        validate_records("department", &self.departments, key_of, Department::validate)?;
        validate_records("job", &self.jobs, key_of, Job::validate)?;
        validate_records("employee", &self.employees, key_of, Employee::validate)?;
        validate_records(
            "job_history",
            &self.job_history,
            describe_history,
            JobHistory::validate,
        )?;

        let regions = KeyIndex::build("region", &self.regions)?;
        let countries = KeyIndex::build("country", &self.countries)?;
        let locations = KeyIndex::build("location", &self.locations)?;
        let departments = KeyIndex::build("department", &self.departments)?;
        let jobs = KeyIndex::build("job", &self.jobs)?;
        let employees = KeyIndex::build("employee", &self.employees)?;

        for country in &self.countries {
            regions.require("country", &country.id, "region_id", &country.region_id)?;
        }
        for location in &self.locations {
            countries.require("location", location.id, "country_id", &location.country_id)?;
        }
        for department in &self.departments {
            locations.require(
                "department",
                department.id,
                "location_id",
                &department.location_id,
            )?;
            if let Some(manager_id) = &department.manager_id {
                employees.require("department", department.id, "manager_id", manager_id)?;
            }
        }
        for employee in &self.employees {
            jobs.require("employee", employee.id, "job_id", &employee.job_id)?;
            departments.require(
                "employee",
                employee.id,
                "department_id",
                &employee.department_id,
            )?;
            if let Some(manager_id) = &employee.manager_id {
                employees.require("employee", employee.id, "manager_id", manager_id)?;
            }
        }
        for history in &self.job_history {
            let id = describe_history(history);
            employees.require("job_history", &id, "employee_id", &history.employee_id)?;
            jobs.require("job_history", &id, "job_id", &history.job_id)?;
            departments.require("job_history", &id, "department_id", &history.department_id)?;
        }

        Ok(())
    }
}

fn load(source: &'static str, document: &str) -> SeedResult<Dataset> {
    let started_at = Instant::now();
    info!("event=dataset_load module=seed status=start source={source}");

    let result = serde_json::from_str::<Dataset>(document)
        .map_err(SeedError::from)
        .and_then(|dataset| dataset.validate().map(|()| dataset));

    match result {
        Ok(dataset) => {
            info!(
                "event=dataset_load module=seed status=ok source={} duration_ms={} employees={} departments={} job_history={}",
                source,
                started_at.elapsed().as_millis(),
                dataset.employees.len(),
                dataset.departments.len(),
                dataset.job_history.len()
            );
            Ok(dataset)
        }
        Err(err) => {
            error!(
                "event=dataset_load module=seed status=error source={} duration_ms={} error_code={} error={}",
                source,
                started_at.elapsed().as_millis(),
                error_code(&err),
                err
            );
            Err(err)
        }
    }
}

fn error_code(err: &SeedError) -> &'static str {
    match err {
        SeedError::Parse(_) => "dataset_parse_failed",
        SeedError::Validation { .. } => "record_invalid",
        SeedError::DuplicateId { .. } => "duplicate_id",
        SeedError::DanglingReference { .. } => "dangling_reference",
    }
}

fn key_of<T: Keyed>(record: &T) -> String {
    record.key().to_string()
}

fn describe_history(history: &JobHistory) -> String {
    format!("{}@{}", history.employee_id, history.start_date)
}

fn validate_records<T>(
    entity: &'static str,
    records: &[T],
    describe: impl Fn(&T) -> String,
    validate: impl Fn(&T) -> Result<(), ModelValidationError>,
) -> SeedResult<()> {
    for record in records {
        validate(record).map_err(|source| SeedError::Validation {
            entity,
            id: describe(record),
            source,
        })?;
    }
    Ok(())
}

/// Set of primary ids for one collection, used to resolve foreign ids.
struct KeyIndex<'a, T: Keyed> {
    entity: &'static str,
    keys: HashSet<&'a T::Key>,
}

impl<'a, T: Keyed> KeyIndex<'a, T> {
    fn build(entity: &'static str, records: &'a [T]) -> SeedResult<Self> {
        let mut keys = HashSet::with_capacity(records.len());
        for record in records {
            if !keys.insert(record.key()) {
                return Err(SeedError::DuplicateId {
                    entity,
                    id: record.key().to_string(),
                });
            }
        }
        Ok(Self { entity, keys })
    }

    fn require(
        &self,
        owner: &'static str,
        owner_id: impl Display,
        field: &'static str,
        target: &T::Key,
    ) -> SeedResult<()> {
        if self.keys.contains(target) {
            return Ok(());
        }
        Err(SeedError::DanglingReference {
            entity: owner,
            id: owner_id.to_string(),
            field,
            target: format!("{} {}", self.entity, target),
        })
    }
}
