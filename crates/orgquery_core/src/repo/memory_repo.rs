//! Repository contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Expose each entity collection through `Repository<T>`.
//! - Bundle one repository per entity type for service construction.
//!
//! # Invariants
//! - Lookup by id returns the first match in insertion order.

use crate::model::employee::{Employee, JobHistory};
use crate::model::geo::{Country, Location, Region};
use crate::model::org::{Department, Job};
use crate::model::Keyed;
use crate::seed::Dataset;
use std::borrow::Borrow;

/// Read-only access to one entity collection.
pub trait Repository<T> {
    /// Returns every record in insertion order.
    fn read_all(&self) -> &[T];

    fn count(&self) -> usize {
        self.read_all().len()
    }

    /// Returns the first record whose primary id equals `id`.
    fn find_by_id<Q>(&self, id: &Q) -> Option<&T>
    where
        T: Keyed,
        T::Key: Borrow<Q>,
        Q: PartialEq + ?Sized,
        Self: Sized,
    {
        self.read_all()
            .iter()
            .find(|record| <T::Key as Borrow<Q>>::borrow(record.key()) == id)
    }
}

impl<T, R> Repository<T> for &R
where
    R: Repository<T> + ?Sized,
{
    fn read_all(&self) -> &[T] {
        (**self).read_all()
    }
}

/// Repository backed by an owned vector.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Repository<T> for InMemoryRepository<T> {
    fn read_all(&self) -> &[T] {
        &self.records
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

/// One repository per entity type.
#[derive(Debug, Clone)]
pub struct OrgRepositories {
    pub regions: InMemoryRepository<Region>,
    pub countries: InMemoryRepository<Country>,
    pub locations: InMemoryRepository<Location>,
    pub departments: InMemoryRepository<Department>,
    pub jobs: InMemoryRepository<Job>,
    pub employees: InMemoryRepository<Employee>,
    pub job_histories: InMemoryRepository<JobHistory>,
}

impl From<Dataset> for OrgRepositories {
    fn from(dataset: Dataset) -> Self {
        Self {
            regions: dataset.regions.into(),
            countries: dataset.countries.into(),
            locations: dataset.locations.into(),
            departments: dataset.departments.into(),
            jobs: dataset.jobs.into(),
            employees: dataset.employees.into(),
            job_histories: dataset.job_history.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRepository, Repository};
    use crate::model::org::Job;

    #[test]
    fn read_all_preserves_insertion_order() {
        let repo = InMemoryRepository::new(vec![
            Job::new("SH_CLERK", "Shipping Clerk"),
            Job::new("AD_PRES", "President"),
        ]);
        let ids: Vec<&str> = repo.read_all().iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, ["SH_CLERK", "AD_PRES"]);
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn find_by_id_accepts_borrowed_key() {
        let repo = InMemoryRepository::new(vec![Job::new("IT_PROG", "Programmer")]);
        let job = repo.find_by_id("IT_PROG").expect("job should be found");
        assert_eq!(job.title, "Programmer");
        assert!(repo.find_by_id("MISSING").is_none());
    }

    #[test]
    fn default_repository_is_empty_for_any_record_type() {
        let repo: InMemoryRepository<Job> = InMemoryRepository::default();
        assert!(repo.read_all().is_empty());
        assert_eq!(repo.count(), 0);
        assert!(repo.find_by_id("IT_PROG").is_none());
    }
}
