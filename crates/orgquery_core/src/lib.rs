//! Core library for orgquery.
//! Holds the organization model, dataset bootstrap, read-only repositories
//! and the query service.

pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{init_logging, logging_status, LogLevel, LoggingConfig};
pub use model::employee::{Employee, EmployeeId, JobHistory};
pub use model::geo::{Country, CountryId, Location, LocationId, Region, RegionId};
pub use model::org::{Department, DepartmentId, Job, JobId};
pub use model::validation::ModelValidationError;
pub use model::Keyed;
pub use repo::memory_repo::{InMemoryRepository, OrgRepositories, Repository};
pub use seed::{Dataset, SeedError, SeedResult};
pub use service::query_service::{OrgQueryService, QueryError, QueryResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Loads the embedded sample dataset into repositories.
pub fn load_sample_repositories() -> SeedResult<OrgRepositories> {
    Dataset::sample().map(OrgRepositories::from)
}

#[cfg(test)]
mod tests {
    use super::{core_version, load_sample_repositories, Repository};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn sample_repositories_cover_every_entity() {
        let repos = load_sample_repositories().expect("sample dataset should load");
        assert_eq!(repos.regions.count(), 4);
        assert_eq!(repos.countries.count(), 25);
        assert_eq!(repos.locations.count(), 23);
        assert_eq!(repos.departments.count(), 27);
        assert_eq!(repos.jobs.count(), 19);
        assert_eq!(repos.employees.count(), 107);
        assert_eq!(repos.job_histories.count(), 10);
    }
}
