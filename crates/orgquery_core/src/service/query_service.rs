//! Organization query service.
//!
//! # Responsibility
//! - Provide filter, extremal, average, grouping, sort and name queries over
//!   the employee, department and job history repositories.
//! - Report absent must-exist values as `QueryError` instead of defaults.
//!
//! # Invariants
//! - Every query is a pure read; repeated calls return identical results.
//! - List queries preserve repository order unless they sort explicitly.
//! - List queries return an empty list when nothing matches.
//! - "Second" extremal values are ranked over distinct salaries.

use crate::model::employee::{Employee, JobHistory};
use crate::model::org::{Department, DepartmentId};
use crate::repo::memory_repo::{OrgRepositories, Repository};
use log::warn;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

const LOW_SALARY_CEILING: u64 = 5_000;
/// Exclusive on both ends.
const MID_SALARY_RANGE: (u64, u64) = (6_000, 7_000);
const SALARY_FLOOR: u64 = 1_000;
const IT_DEPARTMENT_NAME: &str = "IT";
const IT_SALARY_THRESHOLD: u64 = 2_000;
const FIRST_NAME_PREFIX: char = 'A';
const JOB_ID_FRAGMENT: &str = "IT";
const GRANT_DOUGLAS: (&str, &str) = ("Douglas", "Grant");
const DEPARTMENTS_50_80_100: [DepartmentId; 3] = [50, 80, 100];
const DEPARTMENTS_90_60_100_120_130: [DepartmentId; 5] = [90, 60, 100, 120, 130];

pub type QueryResult<T> = Result<T, QueryError>;

/// Failure of a query whose result must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required single record does not exist.
    NotFound(String),
    /// Fewer distinct values exist than the query ranks over.
    InsufficientData { required: usize, available: usize },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "insufficient data: need {required} distinct value(s), found {available}"
            ),
        }
    }
}

impl Error for QueryError {}

#[derive(Debug, Clone, Copy)]
enum Rank {
    Highest,
    Lowest,
}

/// Read-only query facade over the organization repositories.
pub struct OrgQueryService<E, D, H>
where
    E: Repository<Employee>,
    D: Repository<Department>,
    H: Repository<JobHistory>,
{
    employees: E,
    departments: D,
    job_histories: H,
}

impl<'a>
    OrgQueryService<
        &'a dyn Repository<Employee>,
        &'a dyn Repository<Department>,
        &'a dyn Repository<JobHistory>,
    >
{
    /// Creates a service reading from the bundled repositories.
    pub fn from_repositories(repos: &'a OrgRepositories) -> Self {
        Self::new(&repos.employees, &repos.departments, &repos.job_histories)
    }
}

impl<E, D, H> OrgQueryService<E, D, H>
where
    E: Repository<Employee>,
    D: Repository<Department>,
    H: Repository<JobHistory>,
{
    /// Creates a service using the provided repository implementations.
    pub fn new(employees: E, departments: D, job_histories: H) -> Self {
        Self {
            employees,
            departments,
            job_histories,
        }
    }

    /// Returns every employee in repository order.
    pub fn all_employees(&self) -> Vec<&Employee> {
        self.employees.read_all().iter().collect()
    }

    pub fn employee_first_names(&self) -> Vec<&str> {
        self.employees
            .read_all()
            .iter()
            .map(|employee| employee.first_name.as_str())
            .collect()
    }

    /// Returns `true` when nobody earns less than 1000.
    pub fn no_salary_below_1000(&self) -> bool {
        self.employees
            .read_all()
            .iter()
            .all(|employee| employee.salary >= SALARY_FLOOR)
    }

    /// Returns `true` when someone in the department named `IT` earns more
    /// than 2000.
    pub fn any_salary_above_2000_in_it_department(&self) -> bool {
        let it_departments: BTreeSet<DepartmentId> = self
            .departments
            .read_all()
            .iter()
            .filter(|department| department.name == IT_DEPARTMENT_NAME)
            .map(|department| department.id)
            .collect();

        self.employees.read_all().iter().any(|employee| {
            it_departments.contains(&employee.department_id)
                && employee.salary > IT_SALARY_THRESHOLD
        })
    }

    pub fn employees_earning_below_5000(&self) -> Vec<&Employee> {
        self.filter_employees(|employee| employee.salary < LOW_SALARY_CEILING)
    }

    /// Both bounds are exclusive: 6000 and 7000 themselves do not match.
    pub fn employees_earning_between_6000_and_7000(&self) -> Vec<&Employee> {
        let (low, high) = MID_SALARY_RANGE;
        self.filter_employees(|employee| employee.salary > low && employee.salary < high)
    }

    /// Returns the salary of the first employee named Douglas Grant.
    ///
    /// # Errors
    /// - `NotFound` when no such employee exists.
    pub fn grant_douglas_salary(&self) -> QueryResult<u64> {
        let (first_name, last_name) = GRANT_DOUGLAS;
        self.employees
            .read_all()
            .iter()
            .find(|employee| employee.first_name == first_name && employee.last_name == last_name)
            .map(|employee| employee.salary)
            .ok_or_else(|| {
                report(
                    "grant_douglas_salary",
                    QueryError::NotFound(format!("employee {first_name} {last_name}")),
                )
            })
    }

    pub fn max_salary(&self) -> QueryResult<u64> {
        self.ranked_salary("max_salary", Rank::Highest, 0)
    }

    /// Every employee earning the maximum salary; empty when there are no
    /// employees.
    pub fn max_salary_employees(&self) -> Vec<&Employee> {
        match self.distinct_salaries().last() {
            Some(&salary) => self.employees_earning(salary),
            None => Vec::new(),
        }
    }

    /// Second-largest distinct salary.
    ///
    /// # Errors
    /// - `InsufficientData` when fewer than two distinct salaries exist.
    pub fn second_max_salary(&self) -> QueryResult<u64> {
        self.ranked_salary("second_max_salary", Rank::Highest, 1)
    }

    pub fn second_max_salary_employees(&self) -> QueryResult<Vec<&Employee>> {
        let salary = self.second_max_salary()?;
        Ok(self.employees_earning(salary))
    }

    pub fn min_salary(&self) -> QueryResult<u64> {
        self.ranked_salary("min_salary", Rank::Lowest, 0)
    }

    pub fn min_salary_employees(&self) -> Vec<&Employee> {
        match self.distinct_salaries().first() {
            Some(&salary) => self.employees_earning(salary),
            None => Vec::new(),
        }
    }

    /// Second-smallest distinct salary.
    ///
    /// # Errors
    /// - `InsufficientData` when fewer than two distinct salaries exist.
    pub fn second_min_salary(&self) -> QueryResult<u64> {
        self.ranked_salary("second_min_salary", Rank::Lowest, 1)
    }

    pub fn second_min_salary_employees(&self) -> QueryResult<Vec<&Employee>> {
        let salary = self.second_min_salary()?;
        Ok(self.employees_earning(salary))
    }

    /// Arithmetic mean of all salaries.
    ///
    /// # Errors
    /// - `InsufficientData` when there are no employees.
    pub fn average_salary(&self) -> QueryResult<f64> {
        self.mean_salary().ok_or_else(|| {
            report(
                "average_salary",
                QueryError::InsufficientData {
                    required: 1,
                    available: 0,
                },
            )
        })
    }

    /// Employees earning strictly more than the average.
    pub fn employees_above_average(&self) -> Vec<&Employee> {
        match self.mean_salary() {
            Some(average) => self.filter_employees(|employee| employee.salary as f64 > average),
            None => Vec::new(),
        }
    }

    /// Employees earning strictly less than the average.
    pub fn employees_below_average(&self) -> Vec<&Employee> {
        match self.mean_salary() {
            Some(average) => self.filter_employees(|employee| (employee.salary as f64) < average),
            None => Vec::new(),
        }
    }

    pub fn total_departments(&self) -> usize {
        self.departments.count()
    }

    /// Employees grouped by department id, each group in repository order.
    pub fn employees_by_department(&self) -> BTreeMap<DepartmentId, Vec<&Employee>> {
        let mut groups: BTreeMap<DepartmentId, Vec<&Employee>> = BTreeMap::new();
        for employee in self.employees.read_all() {
            groups
                .entry(employee.department_id)
                .or_default()
                .push(employee);
        }
        groups
    }

    /// Job histories sorted by start date, oldest first. Equal start dates
    /// keep repository order.
    pub fn job_histories_by_start_date_ascending(&self) -> Vec<&JobHistory> {
        let mut histories: Vec<&JobHistory> = self.job_histories.read_all().iter().collect();
        histories.sort_by_key(|history| history.start_date);
        histories
    }

    /// Job histories sorted by start date, newest first. Equal start dates
    /// keep repository order.
    pub fn job_histories_by_start_date_descending(&self) -> Vec<&JobHistory> {
        let mut histories: Vec<&JobHistory> = self.job_histories.read_all().iter().collect();
        histories.sort_by(|left, right| right.start_date.cmp(&left.start_date));
        histories
    }

    pub fn employees_first_name_starting_with_a(&self) -> Vec<&Employee> {
        self.filter_employees(|employee| employee.first_name.starts_with(FIRST_NAME_PREFIX))
    }

    pub fn employees_with_job_id_containing_it(&self) -> Vec<&Employee> {
        self.filter_employees(|employee| employee.job_id.contains(JOB_ID_FRAGMENT))
    }

    pub fn employees_in_departments_50_80_100(&self) -> Vec<&Employee> {
        self.filter_employees(|employee| DEPARTMENTS_50_80_100.contains(&employee.department_id))
    }

    pub fn employees_in_departments_90_60_100_120_130(&self) -> Vec<&Employee> {
        self.filter_employees(|employee| {
            DEPARTMENTS_90_60_100_120_130.contains(&employee.department_id)
        })
    }

    pub fn employees_outside_departments_90_60_100_120_130(&self) -> Vec<&Employee> {
        self.filter_employees(|employee| {
            !DEPARTMENTS_90_60_100_120_130.contains(&employee.department_id)
        })
    }

    pub fn employee_initials(&self) -> Vec<String> {
        self.employees
            .read_all()
            .iter()
            .map(Employee::initials)
            .collect()
    }

    pub fn employee_full_names(&self) -> Vec<String> {
        self.employees
            .read_all()
            .iter()
            .map(Employee::full_name)
            .collect()
    }

    /// Character length of the longest `"first last"` name.
    ///
    /// # Errors
    /// - `InsufficientData` when there are no employees.
    pub fn longest_name_length(&self) -> QueryResult<usize> {
        self.max_name_length().ok_or_else(|| {
            report(
                "longest_name_length",
                QueryError::InsufficientData {
                    required: 1,
                    available: 0,
                },
            )
        })
    }

    /// Every employee whose full name has the longest length.
    pub fn longest_named_employees(&self) -> Vec<&Employee> {
        match self.max_name_length() {
            Some(length) => self.filter_employees(|employee| employee.full_name_len() == length),
            None => Vec::new(),
        }
    }

    fn filter_employees(&self, predicate: impl Fn(&Employee) -> bool) -> Vec<&Employee> {
        self.employees
            .read_all()
            .iter()
            .filter(|&employee| predicate(employee))
            .collect()
    }

    fn employees_earning(&self, salary: u64) -> Vec<&Employee> {
        self.filter_employees(|employee| employee.salary == salary)
    }

    fn distinct_salaries(&self) -> BTreeSet<u64> {
        self.employees
            .read_all()
            .iter()
            .map(|employee| employee.salary)
            .collect()
    }

    fn ranked_salary(&self, query: &'static str, rank: Rank, position: usize) -> QueryResult<u64> {
        let salaries = self.distinct_salaries();
        let found = match rank {
            Rank::Highest => salaries.iter().rev().nth(position),
            Rank::Lowest => salaries.iter().nth(position),
        };
        found.copied().ok_or_else(|| {
            report(
                query,
                QueryError::InsufficientData {
                    required: position + 1,
                    available: salaries.len(),
                },
            )
        })
    }

    fn mean_salary(&self) -> Option<f64> {
        let employees = self.employees.read_all();
        if employees.is_empty() {
            return None;
        }
        // A u64 total overflows once two salaries exceed u64::MAX / 2.
        let total: u128 = employees
            .iter()
            .map(|employee| u128::from(employee.salary))
            .sum();
        Some(total as f64 / employees.len() as f64)
    }

    fn max_name_length(&self) -> Option<usize> {
        self.employees
            .read_all()
            .iter()
            .map(Employee::full_name_len)
            .max()
    }
}

fn report(query: &'static str, err: QueryError) -> QueryError {
    warn!("event=query_failed module=service status=error query={query} error={err}");
    err
}

#[cfg(test)]
mod tests {
    use super::{OrgQueryService, QueryError};
    use crate::model::employee::{Employee, JobHistory};
    use crate::model::org::Department;
    use crate::repo::memory_repo::InMemoryRepository;

    #[test]
    fn insufficient_data_message_names_both_counts() {
        let err = QueryError::InsufficientData {
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: need 2 distinct value(s), found 1"
        );
    }

    #[test]
    fn generic_constructor_accepts_owned_repositories() {
        let service = OrgQueryService::new(
            InMemoryRepository::new(vec![Employee::new(1, "Ada", "Byron", 9000, "IT_PROG", 60)]),
            InMemoryRepository::new(vec![Department::new(60, "IT", 1400)]),
            InMemoryRepository::<JobHistory>::new(Vec::new()),
        );
        assert!(service.any_salary_above_2000_in_it_department());
        assert_eq!(service.employee_initials(), ["AB"]);
        assert!(service.job_histories_by_start_date_ascending().is_empty());
    }
}
